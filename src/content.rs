//! Literal page content. Nothing here is fetched; edit and rebuild.

use std::str::FromStr;

use crate::error::UnknownOptionList;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturedSession {
    pub sport: &'static str,
    pub title: &'static str,
    pub instructor: &'static str,
    pub location: &'static str,
    pub time: &'static str,
    pub price: &'static str,
    /// Icon-font class list.
    pub icon: &'static str,
    pub participants: u32,
}

/// Icon, heading and one line of copy. Used by the community and organizer
/// sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURED_SESSIONS: [FeaturedSession; 3] = [
    FeaturedSession {
        sport: "Basketball",
        title: "Elite Skills Training",
        instructor: "Coach Sarah",
        location: "Downtown Court",
        time: "Mon & Wed 6PM",
        price: "Free",
        icon: "fas fa-basketball-ball",
        participants: 12,
    },
    FeaturedSession {
        sport: "Football",
        title: "Youth Development",
        instructor: "Coach Mike",
        location: "City Park",
        time: "Sat 10AM",
        price: "Free",
        icon: "fas fa-football-ball",
        participants: 18,
    },
    FeaturedSession {
        sport: "Tennis",
        title: "Beginner Basics",
        instructor: "Coach Anna",
        location: "Tennis Center",
        time: "Sun 2PM",
        price: "Free",
        icon: "fas fa-table-tennis",
        participants: 8,
    },
];

pub const COMMUNITY_FEATURES: [Highlight; 6] = [
    Highlight {
        icon: "fas fa-users",
        title: "Connect",
        description: "Meet like-minded athletes in your area",
    },
    Highlight {
        icon: "fas fa-calendar",
        title: "Schedule",
        description: "Organize and join training sessions",
    },
    Highlight {
        icon: "fas fa-trophy",
        title: "Achieve",
        description: "Track progress and celebrate milestones",
    },
    Highlight {
        icon: "fas fa-comments",
        title: "Discuss",
        description: "Share tips and techniques with others",
    },
    Highlight {
        icon: "fas fa-map",
        title: "Explore",
        description: "Discover new training locations nearby",
    },
    Highlight {
        icon: "fas fa-star",
        title: "Excel",
        description: "Learn from experienced coaches and athletes",
    },
];

pub const ORGANIZER_BENEFITS: [Highlight; 4] = [
    Highlight {
        icon: "fas fa-calendar-plus",
        title: "Easy Scheduling",
        description: "Create and manage training sessions with our intuitive tools",
    },
    Highlight {
        icon: "fas fa-users-cog",
        title: "Participant Management",
        description: "Track attendance, communicate with participants, and build your community",
    },
    Highlight {
        icon: "fas fa-chart-line",
        title: "Growth Analytics",
        description: "Monitor your sessions performance and participant engagement",
    },
    Highlight {
        icon: "fas fa-money-bill-wave",
        title: "Monetization Options",
        description: "Offer premium sessions and earn from your coaching expertise",
    },
];

pub const PARTNERS: [&str; 8] = [
    "SportsTech Inc",
    "Athletic Alliance",
    "FitPro Networks",
    "Champion Sports",
    "Elite Training Co",
    "Active Life",
    "Sports United",
    "Peak Performance",
];

/// Named `<select>` option sets, addressed from markup by `data-options`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionList {
    SearchSports,
    AgeGroups,
    SkillLevels,
    /// Organizer form and the participant/organizer dialogs.
    Sports,
    ExperienceLevels,
}

impl OptionList {
    pub const ALL: [OptionList; 5] = [
        OptionList::SearchSports,
        OptionList::AgeGroups,
        OptionList::SkillLevels,
        OptionList::Sports,
        OptionList::ExperienceLevels,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OptionList::SearchSports => "search-sports",
            OptionList::AgeGroups => "age-groups",
            OptionList::SkillLevels => "skill-levels",
            OptionList::Sports => "sports",
            OptionList::ExperienceLevels => "experience-levels",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            OptionList::SearchSports => &["Basketball", "Football", "Tennis", "Swimming", "Running"],
            OptionList::AgeGroups => &["All Ages", "Under 18", "18-25", "26-35", "35+"],
            OptionList::SkillLevels => &["Beginner", "Intermediate", "Advanced", "Professional"],
            OptionList::Sports => &[
                "Basketball",
                "Football",
                "Tennis",
                "Swimming",
                "Running",
                "Other",
            ],
            OptionList::ExperienceLevels => &[
                "Professional Coach",
                "Former Athlete",
                "Experienced Player",
                "Passionate Beginner",
            ],
        }
    }
}

impl FromStr for OptionList {
    type Err = UnknownOptionList;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptionList::ALL
            .into_iter()
            .find(|l| l.key() == s)
            .ok_or_else(|| UnknownOptionList(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_all_free() {
        assert!(FEATURED_SESSIONS.iter().all(|s| s.price == "Free"));
        let total: u32 = FEATURED_SESSIONS.iter().map(|s| s.participants).sum();
        assert_eq!(total, 38);
    }

    #[test]
    fn partner_names_unique() {
        let mut names = PARTNERS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PARTNERS.len());
    }

    #[test]
    fn option_keys_parse_back() {
        for list in OptionList::ALL {
            assert_eq!(list.key().parse::<OptionList>(), Ok(list));
            assert!(!list.options().is_empty());
        }
        assert!("colours".parse::<OptionList>().is_err());
    }
}
