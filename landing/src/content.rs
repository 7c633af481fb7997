//! Page copy. Both presentations render from these tables.

pub const EVENT_DATE: &str = "October 14, 2026";
pub const VENUE: &str = "Microsoft Technology Center";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub target: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRow {
    pub name: &'static str,
    pub sessions: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackIcon {
    Lightbulb,
    Network,
    Lock,
    Pulse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackCard {
    pub icon: TrackIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub image: &'static str,
    pub tag: &'static str,
    pub company: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub title: &'static str,
    pub speaker: &'static str,
    pub role: &'static str,
    pub track: &'static str,
}

impl Session {
    /// 1-based, two-digit label shown on the card.
    pub fn number(index: usize) -> String {
        format!("{:02}", index + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub title: &'static str,
    pub details: [&'static str; 2],
    pub price: &'static str,
    pub note: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
}

pub mod version_a {
    use super::*;

    pub const NAV: [NavLink; 5] = [
        NavLink { label: "About", href: "#about" },
        NavLink { label: "Tracks", href: "#tracks" },
        NavLink { label: "Speakers", href: "#speakers" },
        NavLink { label: "Highlights", href: "#highlights" },
        NavLink { label: "Contact", href: "#contact" },
    ];

    pub const HERO_IMAGE: &str = "/images/conference.jpg";
    pub const HERO_INFO: &str = "October 14, 2026 \u{2022} Microsoft Technology Center, NYC. \
        A one-day immersive conference for SMB leaders \u{2014} 24 expert sessions, \
        4 strategic tracks, 150+ executives.";

    pub const ABOUT: &str = "We bring together 150+ business leaders to discover strategies \
        that drive revenue, strengthen cybersecurity, and unlock the full potential of cloud \
        and AI \u{2014} all in one transformative day at Microsoft Technology Center.";

    pub const STATS: [Stat; 4] = [
        Stat { target: 24, suffix: "+", label: "Expert Sessions" },
        Stat { target: 150, suffix: "+", label: "Attendees" },
        Stat { target: 4, suffix: "", label: "Strategic Tracks" },
        Stat { target: 1, suffix: "", label: "Epic Day" },
    ];

    pub const TRACKS: [TrackRow; 4] = [
        TrackRow { name: "Revenue Growth", sessions: "6 sessions" },
        TrackRow { name: "Cybersecurity", sessions: "6 sessions" },
        TrackRow { name: "Cloud & AI", sessions: "6 sessions" },
        TrackRow { name: "Productivity", sessions: "6 sessions" },
    ];

    pub const EVENT_IMAGE: &str = "/images/events-section.jpg";
    pub const EVENT_HEADING: &str = "An experience designed for executive impact";
    pub const EVENT_COPY: &str = "Aspire 26 goes beyond typical conferences. Expect hands-on \
        workshops, fireside chats with industry pioneers, and actionable strategies you can \
        implement the next morning. Network with 150+ decision-makers in an intimate, \
        high-signal environment.";

    pub const SPONSORS_COPY: &str = "Aspire is made possible by leading technology partners. \
        From cloud infrastructure to cybersecurity, our sponsors bring cutting-edge solutions \
        to help your business thrive.";
    pub const SPONSORS: [&str; 6] = [
        "Microsoft",
        "WatchGuard",
        "SentinelOne",
        "Datto",
        "Cisco Meraki",
        "Barracuda",
    ];

    pub const HIGHLIGHTS: [Highlight; 3] = [
        Highlight {
            image: "/images/event-anniversary.jpg",
            tag: "Keynote",
            company: "Main Stage",
            title: "Olympic medalist Jack Alexy on peak performance",
        },
        Highlight {
            image: "/images/event-cruise.jpg",
            tag: "Workshop",
            company: "Cloud Track",
            title: "Hands-on AI adoption strategies for SMBs",
        },
        Highlight {
            image: "/images/event-sailing.jpg",
            tag: "Networking",
            company: "Executive Mixer",
            title: "150+ leaders connecting at Microsoft NYC",
        },
    ];

    pub const CTA_PERSON: Person = Person {
        name: "Jennifer Mazzanti",
        role: "CEO & Co-Founder, eMazzanti",
        photo: "/images/theresa.jpg",
    };
    pub const CTA_HEADING: &str = "Ready to transform your business in one day?";
    pub const CTA_COPY: &str = "With over 20 years powering businesses through technology, \
        eMazzanti brings you a day of expert insights, hands-on learning, and meaningful \
        connections \u{2014} completely free.";

    pub const NEWSLETTER_PERSON: Person = Person {
        name: "Carl Mazzanti",
        role: "President, eMazzanti",
        photo: "/images/rob.jpg",
    };
    pub const NEWSLETTER_HEADING: &str =
        "Subscribe for speaker reveals, agenda updates, and early access.";

    pub const FOOTER_BLURB: &str = "Powered by eMazzanti Technologies \u{2014} a leading managed \
        services provider, Microsoft expert, and WatchGuard Platinum partner since 2001.";
    pub const FOOTER_SOCIAL: [(&str, &str); 3] =
        [("LinkedIn", "in"), ("Twitter", "X"), ("YouTube", "YT")];
    pub const FOOTER_COLUMNS: [[&str; 5]; 2] = [
        [
            "Revenue Growth",
            "Cybersecurity",
            "Cloud & AI",
            "Productivity",
            "Full Agenda",
        ],
        [
            "About Aspire",
            "Speakers",
            "Register",
            "Contact",
            "eMazzanti.net",
        ],
    ];
    pub const FOOTER_LEGAL: [&str; 3] = ["Privacy", "Terms", "Cookies"];
    pub const COPYRIGHT: &str = "\u{a9} 2026 eMazzanti Technologies. All rights reserved.";
}

pub mod version_b {
    use super::*;

    pub const TAGLINE: &str = "eMazzanti's conference for people who build businesses";

    pub const TRACKS: [TrackCard; 4] = [
        TrackCard {
            icon: TrackIcon::Lightbulb,
            title: "AI & Innovation",
            description: "Practical AI strategies for SMBs \u{2014} from automation and \
                copilots to revenue-driving machine learning implementations.",
        },
        TrackCard {
            icon: TrackIcon::Network,
            title: "Cloud & Infrastructure",
            description: "Build scalable, resilient IT foundations with modern cloud \
                architecture, hybrid solutions, and infrastructure best practices.",
        },
        TrackCard {
            icon: TrackIcon::Lock,
            title: "Cybersecurity",
            description: "Zero-trust frameworks, threat detection, and compliance strategies \
                to protect your business from evolving cyber risks.",
        },
        TrackCard {
            icon: TrackIcon::Pulse,
            title: "Business Growth",
            description: "Leadership insights, operational excellence, and growth strategies \
                from founders and executives who've scaled successfully.",
        },
    ];

    pub const STATS: [Stat; 3] = [
        Stat { target: 20, suffix: "+", label: "speakers" },
        Stat { target: 24, suffix: "+", label: "sessions" },
        Stat { target: 150, suffix: "+", label: "attendees" },
    ];

    pub const WHY_LEARN: &str = "Hear from industry experts on AI adoption, cloud strategy, and \
        cybersecurity. Get first-look insights into emerging technologies and discover how \
        leading SMBs are leveraging innovation to drive revenue and reduce costs.";
    pub const WHY_MEET: &str = "Over 150 business owners, executives, and technology leaders \
        attend Aspire to exchange ideas, build relationships, and find new ways to grow. \
        Connect with peers who share your ambition and challenges.";
    pub const WHY_EXPECT: &str = "Attend inspiring keynotes, level up with hands-on workshops \
        across four strategic tracks, and walk away with actionable strategies and new \
        connections to fuel your next chapter of growth.";

    pub const SESSIONS: [Session; 4] = [
        Session {
            title: "AI strategies that actually drive revenue for SMBs",
            speaker: "Bryan Antepara",
            role: "Cloud Engineer",
            track: "AI & Innovation",
        },
        Session {
            title: "Building scalable IT infrastructure from day one",
            speaker: "Carl Mazzanti",
            role: "President, eMazzanti",
            track: "Cloud & Infrastructure",
        },
        Session {
            title: "Zero-trust cybersecurity for the modern workplace",
            speaker: "Brindavani Pathuri",
            role: "Network Engineer",
            track: "Cybersecurity",
        },
        Session {
            title: "Championship culture: leadership lessons from sports",
            speaker: "Dan Karosen",
            role: "Co-Founder, FC Motown",
            track: "Business Growth",
        },
    ];

    pub const FAQS: [Faq; 4] = [
        Faq {
            question: "Who should attend Aspire 26?",
            answer: "Aspire is designed for business owners, executives, IT leaders, and \
                technology staff at small to medium-sized businesses looking to drive growth \
                through technology.",
        },
        Faq {
            question: "When and where is Aspire 26?",
            answer: "Aspire 26 takes place on October 14, 2026 at the Microsoft Technology \
                Center in Times Square, New York City. The event runs from 9:00 AM to 5:00 PM.",
        },
        Faq {
            question: "Is there a virtual option?",
            answer: "Yes \u{2014} virtual attendance is completely free. You'll have access to \
                all keynotes and select sessions via livestream.",
        },
        Faq {
            question: "How do I become a sponsor?",
            answer: "We partner with leading technology companies to deliver value to \
                attendees. Contact us at aspire@emazzanti.net to discuss sponsorship \
                opportunities.",
        },
    ];

    pub const TICKETS: [Ticket; 2] = [
        Ticket {
            title: "In person",
            details: ["Microsoft Technology Center", "New York City, NY"],
            price: "Free",
            note: "Limited to 150 attendees",
            cta: "Select in person",
        },
        Ticket {
            title: "Virtual",
            details: ["Livestream", "Online"],
            price: "Free",
            note: "Unlimited access to all keynotes",
            cta: "Select virtual",
        },
    ];

    pub const FOOTER_COLUMNS: [&[NavLink]; 2] = [
        &[
            NavLink { label: "Register", href: "#" },
            NavLink { label: "FAQ", href: "#faq" },
            NavLink { label: "Why attend", href: "#" },
        ],
        &[
            NavLink { label: "X", href: "#" },
            NavLink { label: "LinkedIn", href: "#" },
            NavLink { label: "Instagram", href: "#" },
            NavLink { label: "YouTube", href: "#" },
        ],
    ];
    pub const FOOTER_LEGAL: [&str; 2] = ["Cookie settings", "Event Terms"];
    pub const COPYRIGHT: &str = "\u{a9} eMazzanti 2026";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn nav_targets_are_page_anchors() {
        let hrefs: Vec<_> = version_a::NAV.iter().map(|l| l.href).collect();
        assert_eq!(
            hrefs,
            vec!["#about", "#tracks", "#speakers", "#highlights", "#contact"]
        );
    }

    #[test]
    fn stats_match_the_headline_numbers() {
        let a: Vec<_> = version_a::STATS.iter().map(|s| (s.target, s.suffix)).collect();
        assert_eq!(a, vec![(24, "+"), (150, "+"), (4, ""), (1, "")]);
        let b: Vec<_> = version_b::STATS.iter().map(|s| s.target).collect();
        assert_eq!(b, vec![20, 24, 150]);
    }

    #[test]
    fn session_numbers_are_zero_padded() {
        let numbers: Vec<_> = (0..version_b::SESSIONS.len()).map(Session::number).collect();
        assert_eq!(numbers, vec!["01", "02", "03", "04"]);
        assert_eq!(Session::number(11), "12");
    }

    #[test]
    fn every_track_card_has_its_own_icon() {
        let icons: HashSet<_> = version_b::TRACKS.iter().map(|t| t.icon).collect();
        assert_eq!(icons.len(), version_b::TRACKS.len());
        assert_eq!(icons.len(), 4);
    }

    #[test]
    fn faq_questions_are_unique() {
        let faqs = &version_b::FAQS;
        for (i, a) in faqs.iter().enumerate() {
            assert!(faqs[i + 1..].iter().all(|b| b.question != a.question));
        }
    }

    #[test]
    fn continued_lines_keep_single_spaces() {
        assert!(!version_a::HERO_INFO.contains("  "));
        assert!(version_a::HERO_INFO.contains("SMB leaders \u{2014} 24 expert sessions"));
    }

    #[test]
    fn footer_links_point_at_faq_anchor() {
        let faq = version_b::FOOTER_COLUMNS[0]
            .iter()
            .find(|l| l.label == "FAQ")
            .map(|l| l.href);
        assert_eq!(faq, Some("#faq"));
    }
}
