//! Static page content: fixed tables, defined once, never mutated.

pub struct Course {
    pub name: &'static str,
    pub icon: &'static str,
    pub blurb: &'static str,
}

pub const COURSES: &[Course] = &[
    Course {
        name: "Core Java",
        icon: "☕",
        blurb: "Master Java fundamentals",
    },
    Course {
        name: "Advanced Java",
        icon: "🚀",
        blurb: "Enterprise Java development",
    },
    Course {
        name: ".NET & C#",
        icon: "⚡",
        blurb: "Microsoft technology stack",
    },
    Course {
        name: "Android Development",
        icon: "📱",
        blurb: "Native Android apps",
    },
    Course {
        name: "iOS Development",
        icon: "🍎",
        blurb: "Native iOS applications",
    },
    Course {
        name: "Cross-Platform Mobile",
        icon: "🔄",
        blurb: "Flutter, React Native, .NET MAUI",
    },
    Course {
        name: "Data Science",
        icon: "📊",
        blurb: "Analytics & ML fundamentals",
    },
    Course {
        name: "Cloud Computing",
        icon: "☁️",
        blurb: "Azure & AWS platforms",
    },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        number: "500+",
        label: "Students Trained",
        icon: "👥",
    },
    Stat {
        number: "95%",
        label: "Placement Rate",
        icon: "📈",
    },
    Stat {
        number: "50+",
        label: "Hiring Partners",
        icon: "🤝",
    },
    Stat {
        number: "15+",
        label: "Industry Experts",
        icon: "👨‍🏫",
    },
];

pub const FEATURES: &[&str] = &[
    "Industry-Expert Trainers",
    "Real-Time Project Training",
    "Certificate Upon Completion",
    "Career Guidance for Freshers",
    "Resume Building Support",
    "Interview Preparation",
    "Mock Interviews",
    "Job-Oriented Training",
    "Placement Assistance",
    "Modern Learning Environment",
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Rahul Sharma",
        role: "Java Developer at TCS",
        quote: "DexoFlux transformed my career. The hands-on training and placement support helped me land my dream job!",
        rating: 5,
    },
    Testimonial {
        name: "Priya Reddy",
        role: "Data Scientist at Accenture",
        quote: "The Data Science course was exceptional. Real-world projects and expert mentors made all the difference.",
        rating: 5,
    },
    Testimonial {
        name: "Karthik Menon",
        role: "Mobile Developer at Infosys",
        quote: "Best decision I made! The React Native training was top-notch and the mock interviews prepared me perfectly.",
        rating: 5,
    },
];

pub struct JourneyStep {
    pub step: u8,
    pub title: &'static str,
    pub blurb: &'static str,
    pub icon: &'static str,
}

pub const JOURNEY: &[JourneyStep] = &[
    JourneyStep {
        step: 1,
        title: "Foundation Building",
        blurb: "Master core concepts with expert guidance",
        icon: "📚",
    },
    JourneyStep {
        step: 2,
        title: "Hands-On Projects",
        blurb: "Work on real-world industry projects",
        icon: "💻",
    },
    JourneyStep {
        step: 3,
        title: "Career Preparation",
        blurb: "Resume building and interview training",
        icon: "🎯",
    },
    JourneyStep {
        step: 4,
        title: "Job Placement",
        blurb: "Get placed with our hiring partners",
        icon: "🚀",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_hold_the_published_content() {
        assert_eq!(COURSES.len(), 8);
        assert_eq!(STATS.len(), 4);
        assert_eq!(FEATURES.len(), 10);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(JOURNEY.len(), 4);
    }

    #[test]
    fn journey_steps_are_numbered_consecutively() {
        for (index, step) in JOURNEY.iter().enumerate() {
            assert_eq!(step.step as usize, index + 1);
        }
    }

    #[test]
    fn ratings_stay_within_five_stars() {
        for t in TESTIMONIALS {
            assert!((1..=5).contains(&t.rating));
        }
    }

    #[test]
    fn no_entry_ships_empty_copy() {
        for c in COURSES {
            assert!(!c.name.is_empty() && !c.blurb.is_empty());
        }
        for s in STATS {
            assert!(!s.number.is_empty() && !s.label.is_empty());
        }
        for t in TESTIMONIALS {
            assert!(!t.name.is_empty() && !t.quote.is_empty());
        }
    }
}
