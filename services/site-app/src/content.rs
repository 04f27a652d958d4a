//! Static page content

pub const CLUB_NAME: &str = "Robotics Club";
pub const HACKATHON_NAME: &str = "RoboHack";
pub const CONTACT_EMAIL: &str = "robotics.club@university.edu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        title: "Build Nights",
        summary: "Weekly open lab sessions with soldering stations, 3D printers and a parts library.",
    },
    Activity {
        title: "Workshops",
        summary: "Hands-on introductions to embedded programming, ROS, computer vision and control.",
    },
    Activity {
        title: "Competitions",
        summary: "Club teams compete in line-following, robo-sumo and autonomous navigation events.",
    },
    Activity {
        title: "Outreach",
        summary: "Demo days and school visits that get younger students excited about robotics.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub date: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        date: "Registration opens",
        title: "Form your team",
        detail: "Teams of two to four register with a project title and a short pitch video.",
    },
    Milestone {
        date: "Round 1",
        title: "Idea screening",
        detail: "Judges shortlist teams based on the problem fit and feasibility of the pitch.",
    },
    Milestone {
        date: "Round 2",
        title: "Build sprint",
        detail: "Shortlisted teams build their prototype over a 36-hour on-campus sprint.",
    },
    Milestone {
        date: "Finale",
        title: "Demo day",
        detail: "Final demos to the jury, followed by awards and the closing ceremony.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prize {
    pub place: &'static str,
    pub reward: &'static str,
}

pub const PRIZES: &[Prize] = &[
    Prize {
        place: "Winner",
        reward: "Cash prize, hardware kits and incubation mentoring",
    },
    Prize {
        place: "Runner-up",
        reward: "Cash prize and development boards for every member",
    },
    Prize {
        place: "Best Hardware Hack",
        reward: "Sensor and actuator bundle",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judge {
    pub name: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub expertise: &'static str,
}

pub const JUDGES: &[Judge] = &[
    Judge {
        name: "Dr. Ananya Rao",
        role: "Professor",
        organization: "Department of Mechanical Engineering",
        expertise: "Mobile robotics and SLAM",
    },
    Judge {
        name: "Vikram Mehta",
        role: "Principal Engineer",
        organization: "Industrial Automation Lab",
        expertise: "Embedded control systems",
    },
    Judge {
        name: "Sara Thomas",
        role: "Founder",
        organization: "Agritech Robotics Startup",
        expertise: "Field robotics and product design",
    },
    Judge {
        name: "Dr. Karan Iyer",
        role: "Research Scientist",
        organization: "Computer Vision Group",
        expertise: "Perception and machine learning",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SponsorTier {
    Title,
    Gold,
    Silver,
    Community,
}

impl SponsorTier {
    pub const ALL: [SponsorTier; 4] = [
        SponsorTier::Title,
        SponsorTier::Gold,
        SponsorTier::Silver,
        SponsorTier::Community,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SponsorTier::Title => "Title Sponsor",
            SponsorTier::Gold => "Gold Sponsors",
            SponsorTier::Silver => "Silver Sponsors",
            SponsorTier::Community => "Community Partners",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sponsor {
    pub name: &'static str,
    pub tier: SponsorTier,
    pub url: &'static str,
}

pub const SPONSORS: &[Sponsor] = &[
    Sponsor {
        name: "Actuate Systems",
        tier: SponsorTier::Title,
        url: "https://example.com/actuate",
    },
    Sponsor {
        name: "CircuitWorks",
        tier: SponsorTier::Gold,
        url: "https://example.com/circuitworks",
    },
    Sponsor {
        name: "Servo Supply Co.",
        tier: SponsorTier::Gold,
        url: "https://example.com/servo-supply",
    },
    Sponsor {
        name: "PCB Express",
        tier: SponsorTier::Silver,
        url: "https://example.com/pcb-express",
    },
    Sponsor {
        name: "Maker Collective",
        tier: SponsorTier::Community,
        url: "https://example.com/maker-collective",
    },
];

/// Sponsors of one tier, in listing order
pub fn sponsors_in(tier: SponsorTier) -> impl Iterator<Item = &'static Sponsor> {
    SPONSORS.iter().filter(move |s| s.tier == tier)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemStatement {
    pub code: &'static str,
    pub track: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROBLEM_STATEMENTS: &[ProblemStatement] = &[
    ProblemStatement {
        code: "RH-01",
        track: "Agriculture",
        title: "Autonomous crop-row monitoring",
        description: "Build a low-cost rover that follows crop rows and flags plants showing signs of disease.",
    },
    ProblemStatement {
        code: "RH-02",
        track: "Healthcare",
        title: "Assistive robotic arm",
        description: "Design a gesture- or voice-controlled arm that helps people with limited mobility with daily tasks.",
    },
    ProblemStatement {
        code: "RH-03",
        track: "Disaster Response",
        title: "Search-and-rescue scout",
        description: "Create a compact robot that maps collapsed structures and locates survivors using onboard sensors.",
    },
    ProblemStatement {
        code: "RH-04",
        track: "Smart Campus",
        title: "Indoor delivery bot",
        description: "Deliver small packages between campus buildings while avoiding people and obstacles.",
    },
    ProblemStatement {
        code: "RH-05",
        track: "Open Innovation",
        title: "Your own robotics idea",
        description: "Pitch any robotics solution to a real problem you care about.",
    },
];
