//! # Reply Catalog
//!
//! The canned conversation data: every topic the portfolio can talk about,
//! the reply body for each, and the follow-up suggestions attached to it.
//!
//! Topics form a closed enum, so a reply lookup can never miss. The data is
//! embedded in the binary and never mutated; the rest of the crate borrows
//! `&'static` references into it.

/// Everything the portfolio knows how to talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    About,
    Background,
    Projects,
    Taskflow,
    Stack,
    Philosophy,
    Collaborate,
    Availability,
    Process,
    Contact,
}

/// A follow-up prompt the visitor can pick instead of typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub label: &'static str,
    pub topic: Topic,
}

/// One catalog entry: the reply body (markdown) plus its follow-up prompts.
#[derive(Debug)]
pub struct Reply {
    pub body: &'static str,
    pub suggestions: &'static [Suggestion],
}

impl Topic {
    /// All topics in catalog order. The order matters for
    /// [`suggestion_label`] lookups.
    pub const ALL: [Topic; 10] = [
        Topic::About,
        Topic::Background,
        Topic::Projects,
        Topic::Taskflow,
        Topic::Stack,
        Topic::Philosophy,
        Topic::Collaborate,
        Topic::Availability,
        Topic::Process,
        Topic::Contact,
    ];

    /// Short lowercase name, used in log lines.
    pub fn key(self) -> &'static str {
        match self {
            Topic::About => "about",
            Topic::Background => "background",
            Topic::Projects => "projects",
            Topic::Taskflow => "taskflow",
            Topic::Stack => "stack",
            Topic::Philosophy => "philosophy",
            Topic::Collaborate => "collaborate",
            Topic::Availability => "availability",
            Topic::Process => "process",
            Topic::Contact => "contact",
        }
    }

    /// The canned reply for this topic. Total by construction.
    pub fn reply(self) -> &'static Reply {
        match self {
            Topic::About => &ABOUT,
            Topic::Background => &BACKGROUND,
            Topic::Projects => &PROJECTS,
            Topic::Taskflow => &TASKFLOW,
            Topic::Stack => &STACK,
            Topic::Philosophy => &PHILOSOPHY,
            Topic::Collaborate => &COLLABORATE,
            Topic::Availability => &AVAILABILITY,
            Topic::Process => &PROCESS,
            Topic::Contact => &CONTACT,
        }
    }
}

/// The prompt pills shown on the hero screen before any conversation.
pub const INITIAL_SUGGESTIONS: &[Suggestion] = &[
    Suggestion { label: "Who are you?", topic: Topic::About },
    Suggestion { label: "What projects have you built?", topic: Topic::Projects },
    Suggestion { label: "What tools do you use?", topic: Topic::Stack },
    Suggestion { label: "Can we work together?", topic: Topic::Collaborate },
];

/// Shown when no suggestion list carries a label for a topic. Unreachable
/// with the shipped catalog (every topic appears in some list), kept so a
/// pruned custom catalog degrades to a generic prompt instead of failing.
const FALLBACK_LABEL: &str = "Tell me more";

/// First label for `topic` across the given suggestion lists, in order,
/// falling back to [`FALLBACK_LABEL`].
fn label_from<'a, I>(topic: Topic, lists: I) -> &'static str
where
    I: IntoIterator<Item = &'a [Suggestion]>,
{
    lists
        .into_iter()
        .flat_map(|l| l.iter())
        .find(|s| s.topic == topic)
        .map(|s| s.label)
        .unwrap_or(FALLBACK_LABEL)
}

/// Resolve the display label for a topic: the initial suggestion set wins,
/// then every reply's suggestion list in catalog order, then a generic
/// placeholder.
pub fn suggestion_label(topic: Topic) -> &'static str {
    let lists = std::iter::once(INITIAL_SUGGESTIONS)
        .chain(Topic::ALL.iter().map(|t| t.reply().suggestions));
    label_from(topic, lists)
}

// ============================================================================
// Catalog data
// ============================================================================

static ABOUT: Reply = Reply {
    body: "I'm a passionate developer who believes in building products that people genuinely \
love to use. With a background in full-stack development and a keen eye for design, I focus on \
creating experiences that are both technically excellent and delightfully intuitive. I'm \
constantly exploring new technologies and methodologies to push the boundaries of what's \
possible on the web.",
    suggestions: &[
        Suggestion { label: "What's your background?", topic: Topic::Background },
        Suggestion { label: "What projects have you built?", topic: Topic::Projects },
        Suggestion { label: "What's your development philosophy?", topic: Topic::Philosophy },
    ],
};

static BACKGROUND: Reply = Reply {
    body: "I started my journey in computer science with a fascination for how technology can \
solve real-world problems. Over the years, I've worked across various domains - from fintech \
startups to enterprise solutions. I have a Master's degree in Computer Science and have been \
building for the web for over 5 years. My experience spans both frontend and backend \
development, with a particular passion for creating seamless user experiences.",
    suggestions: &[
        Suggestion { label: "What projects have you built?", topic: Topic::Projects },
        Suggestion { label: "What tools do you use?", topic: Topic::Stack },
        Suggestion { label: "Can we work together?", topic: Topic::Collaborate },
    ],
};

static PROJECTS: Reply = Reply {
    body: "I've built a diverse range of projects that showcase my passion for innovation:\n\n\
🚀 **TaskFlow AI** - An intelligent project management tool that uses AI to predict project \
timelines and optimize resource allocation\n\n\
💰 **CryptoTracker Pro** - A real-time cryptocurrency portfolio tracker with advanced analytics \
and alerts\n\n\
🛒 **ShopSmart** - An e-commerce platform with AI-powered product recommendations\n\n\
📱 **MoodSpace** - A mental wellness app that helps users track and improve their emotional \
well-being\n\n\
Each project taught me something new about user experience, technical architecture, and the \
importance of solving real problems.",
    suggestions: &[
        Suggestion { label: "Tell me about TaskFlow AI", topic: Topic::Taskflow },
        Suggestion { label: "What tools do you use?", topic: Topic::Stack },
        Suggestion { label: "How can I contact you?", topic: Topic::Contact },
    ],
};

static TASKFLOW: Reply = Reply {
    body: "**TaskFlow AI** is one of my most ambitious projects - a next-generation project \
management platform that leverages machine learning to make teams more productive.\n\n\
✨ **Key Features:**\n\
• AI-powered timeline predictions based on historical data\n\
• Smart resource allocation and workload balancing\n\
• Automated progress tracking and bottleneck detection\n\
• Integration with popular tools like Slack, GitHub, and Jira\n\n\
🛠 **Tech Stack:** React, Node.js, Python (for ML models), PostgreSQL, Redis, Docker\n\n\
The platform has helped teams reduce project delivery time by an average of 23% while improving \
resource utilization.",
    suggestions: &[
        Suggestion { label: "What other projects have you built?", topic: Topic::Projects },
        Suggestion { label: "What's your tech stack?", topic: Topic::Stack },
        Suggestion { label: "Can we collaborate?", topic: Topic::Collaborate },
    ],
};

static STACK: Reply = Reply {
    body: "I work with modern, battle-tested technologies that enable me to build scalable and \
maintainable applications:\n\n\
**Frontend:** React, Next.js, TypeScript, Tailwind CSS, Framer Motion\n\
**Backend:** Node.js, Python, Express, FastAPI, GraphQL\n\
**Databases:** PostgreSQL, MongoDB, Redis\n\
**Cloud & DevOps:** AWS, Vercel, Docker, GitHub Actions\n\
**AI/ML:** OpenAI API, TensorFlow, Pandas, NumPy\n\
**Design:** Figma, Adobe Creative Suite\n\n\
I believe in choosing the right tool for the job while maintaining consistency and focusing on \
developer experience and performance.",
    suggestions: &[
        Suggestion { label: "What projects showcase these skills?", topic: Topic::Projects },
        Suggestion { label: "What's your development philosophy?", topic: Topic::Philosophy },
        Suggestion { label: "Let's work together", topic: Topic::Collaborate },
    ],
};

static PHILOSOPHY: Reply = Reply {
    body: "My development philosophy centers around three core principles:\n\n\
🎯 **User-First Design** - Every technical decision should ultimately serve the user's needs \
and create delightful experiences\n\n\
⚡ **Performance & Accessibility** - Fast, accessible applications aren't just nice-to-have, \
they're essential for reaching and serving everyone\n\n\
🔄 **Continuous Learning** - Technology evolves rapidly, so I'm constantly experimenting with \
new tools, patterns, and approaches to stay at the cutting edge\n\n\
I believe the best software is invisible - it just works, feels natural, and empowers users to \
accomplish their goals effortlessly.",
    suggestions: &[
        Suggestion { label: "What projects reflect this philosophy?", topic: Topic::Projects },
        Suggestion { label: "What tools do you use?", topic: Topic::Stack },
        Suggestion { label: "How can we work together?", topic: Topic::Collaborate },
    ],
};

static COLLABORATE: Reply = Reply {
    body: "I'm always excited to work on meaningful projects with passionate people! Whether \
you're a startup looking to build your MVP, an established company wanting to innovate, or a \
fellow developer interested in collaboration, I'd love to hear from you.\n\n\
💼 **What I offer:**\n\
• Full-stack development expertise\n\
• Product strategy and technical consultation\n\
• UI/UX design and prototyping\n\
• AI integration and automation\n\n\
🤝 **Ideal collaborations:**\n\
• SaaS platforms and web applications\n\
• AI-powered tools and automation\n\
• Consumer apps with complex technical requirements\n\
• Open source projects that make a difference",
    suggestions: &[
        Suggestion { label: "How can I contact you?", topic: Topic::Contact },
        Suggestion { label: "What's your availability?", topic: Topic::Availability },
        Suggestion { label: "Tell me about your process", topic: Topic::Process },
    ],
};

static AVAILABILITY: Reply = Reply {
    body: "I'm currently available for new projects and collaborations! I typically work with \
2-3 clients at a time to ensure each project gets the attention and quality it deserves.\n\n\
📅 **Timeline:** Most projects can start within 1-2 weeks\n\
⏰ **Commitment:** I believe in deep, focused work rather than juggling too many projects\n\
🌍 **Location:** I work remotely but love collaborating across time zones\n\n\
I prefer working on projects where I can be involved from strategy through execution, ensuring \
we build something truly exceptional together.",
    suggestions: &[
        Suggestion { label: "How can I contact you?", topic: Topic::Contact },
        Suggestion { label: "What's your process like?", topic: Topic::Process },
        Suggestion { label: "What projects have you built?", topic: Topic::Projects },
    ],
};

static PROCESS: Reply = Reply {
    body: "My development process is designed to minimize risk while maximizing value \
delivery:\n\n\
🔍 **Discovery Phase** - Deep dive into your goals, user needs, and technical requirements\n\
📋 **Strategy & Planning** - Create detailed roadmaps, wireframes, and technical architecture\n\
🚀 **Iterative Development** - Build in 2-week sprints with regular demos and feedback loops\n\
✅ **Quality Assurance** - Comprehensive testing, performance optimization, and security \
review\n\
🎯 **Launch & Beyond** - Deployment, monitoring, and ongoing support\n\n\
I believe in transparent communication, regular updates, and delivering working software early \
and often.",
    suggestions: &[
        Suggestion { label: "Let's start a project together", topic: Topic::Contact },
        Suggestion { label: "What tools do you use?", topic: Topic::Stack },
        Suggestion { label: "Tell me about your projects", topic: Topic::Projects },
    ],
};

static CONTACT: Reply = Reply {
    body: "Ready to build something amazing together? I'd love to hear about your project and \
explore how we can bring your vision to life.\n\n\
📧 **Email:** hello@yourportfolio.com\n\
💼 **LinkedIn:** /in/yourprofile\n\
🐙 **GitHub:** /yourusername\n\
📅 **Calendar:** Schedule a call at calendly.com/yourname\n\n\
⚡ **Quick Response Promise:** I typically respond to project inquiries within 24 hours. For \
urgent matters, feel free to mention it in your message.\n\n\
Looking forward to hearing from you!",
    suggestions: &[
        Suggestion { label: "Tell me about yourself", topic: Topic::About },
        Suggestion { label: "What projects have you built?", topic: Topic::Projects },
        Suggestion { label: "What's your availability?", topic: Topic::Availability },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_a_nonempty_body() {
        for topic in Topic::ALL {
            assert!(
                !topic.reply().body.trim().is_empty(),
                "{} has an empty body",
                topic.key()
            );
        }
    }

    #[test]
    fn every_reply_carries_three_suggestions() {
        for topic in Topic::ALL {
            assert_eq!(
                topic.reply().suggestions.len(),
                3,
                "{} should offer exactly three follow-ups",
                topic.key()
            );
        }
    }

    #[test]
    fn suggestion_labels_are_nonempty() {
        for topic in Topic::ALL {
            for suggestion in topic.reply().suggestions {
                assert!(!suggestion.label.trim().is_empty());
            }
        }
    }

    #[test]
    fn initial_set_has_four_prompts() {
        assert_eq!(INITIAL_SUGGESTIONS.len(), 4);
    }

    #[test]
    fn initial_set_wins_label_lookup() {
        // About also appears in contact's follow-ups as "Tell me about yourself",
        // but the hero phrasing takes priority.
        assert_eq!(suggestion_label(Topic::About), "Who are you?");
        assert_eq!(suggestion_label(Topic::Projects), "What projects have you built?");
    }

    #[test]
    fn labels_fall_back_to_reply_suggestions() {
        assert_eq!(suggestion_label(Topic::Background), "What's your background?");
        assert_eq!(suggestion_label(Topic::Taskflow), "Tell me about TaskFlow AI");
        assert_eq!(suggestion_label(Topic::Availability), "What's your availability?");
    }

    #[test]
    fn every_topic_resolves_to_a_specific_label() {
        for topic in Topic::ALL {
            assert_ne!(
                suggestion_label(topic),
                FALLBACK_LABEL,
                "{} should be reachable from some suggestion list",
                topic.key()
            );
        }
    }

    #[test]
    fn unlisted_topic_gets_the_placeholder_label() {
        // No list mentions the topic: the generic prompt steps in.
        assert_eq!(label_from(Topic::Contact, [&[] as &[Suggestion]]), FALLBACK_LABEL);
        assert_eq!(
            label_from(Topic::Taskflow, [INITIAL_SUGGESTIONS]),
            FALLBACK_LABEL
        );
        // A list that does mention it still wins.
        assert_eq!(
            label_from(Topic::About, [INITIAL_SUGGESTIONS]),
            "Who are you?"
        );
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = Topic::ALL.iter().map(|t| t.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Topic::ALL.len());
    }
}
