//! Default values for content fields.
//!
//! These functions are used by serde for default deserialization. Together
//! they form the built-in site content; a `content.toml` file overrides them
//! per field.

// ============================================================================
// Identity Defaults
// ============================================================================

pub mod identity {
    pub fn name() -> String {
        "Arnab Mallick".into()
    }

    pub fn logo() -> String {
        "/logo.webp".into()
    }

    pub fn email() -> String {
        "arnabb@duck.com".into()
    }
}

// ============================================================================
// Navigation Defaults
// ============================================================================

pub mod navbar {
    use super::super::links::NavBarLink;

    pub fn links() -> Vec<NavBarLink> {
        [
            ("Home", "/"),
            ("About", "/about"),
            ("Projects", "/projects"),
            ("Blog", "/blog"),
            ("Research", "/research"),
        ]
        .into_iter()
        .map(|(title, url)| NavBarLink {
            title: title.into(),
            url: url.into(),
        })
        .collect()
    }
}

// ============================================================================
// Social Link Defaults
// ============================================================================

pub mod social {
    use super::super::links::SocialLink;

    pub fn links() -> Vec<SocialLink> {
        vec![
            SocialLink {
                title: "GitHub".into(),
                url: "https://github.com/Arnab-m1".into(),
                icon: "mdi:github".into(),
                external: true,
            },
            SocialLink {
                title: "Mail".into(),
                url: format!("mailto:{}", super::identity::email()),
                icon: "mdi:email".into(),
                external: false,
            },
        ]
    }
}

// ============================================================================
// Page Content Defaults
// ============================================================================

pub mod pages {
    pub mod home {
        use super::super::super::{links::PageLink, seo::SeoMetadata};
        use super::super::identity;

        pub fn seo() -> SeoMetadata {
            SeoMetadata {
                title: identity::name(),
                description:
                    "Full time Cloud Engineer from India who loves building cool things.".into(),
                image: identity::logo(),
            }
        }

        pub fn role() -> String {
            "Software Developer".into()
        }

        pub fn description() -> String {
            "I'm Arnab Mallick, a full time Cloud Engineer from India who loves building cool things."
                .into()
        }

        pub fn links() -> Vec<PageLink> {
            vec![
                PageLink {
                    title: "My Projects".into(),
                    url: "/projects".into(),
                },
                PageLink {
                    title: "About Me".into(),
                    url: "/about".into(),
                },
            ]
        }
    }

    pub mod about {
        use super::super::super::pages::about::{Company, Image, WorkItem};
        use super::super::super::seo::SeoMetadata;
        use super::super::identity;

        pub fn seo() -> SeoMetadata {
            SeoMetadata {
                title: format!("About | {}", identity::name()),
                description:
                    "Full time Cloud Engineer from India who loves building cool things.".into(),
                image: identity::logo(),
            }
        }

        pub fn subtitle() -> String {
            "Some information about myself".into()
        }

        pub fn description() -> String {
            "I'm Arnab Mallick, a full time Cloud Engineer from India who loves building cool things.\n\n\
             Most of my day revolves around AWS, Kubernetes and far too much YAML. Off the clock I \
             build small tools for my homelab and write about whatever breaks along the way.\n\n\
             This site is where the projects, notes and experiments end up."
                .into()
        }

        pub fn image_l() -> Image {
            Image {
                url: "/about-desk.jpg".into(),
                alt: "My desk setup".into(),
            }
        }

        pub fn image_r() -> Image {
            Image {
                url: "/about-talk.jpg".into(),
                alt: "Speaking at a local meetup".into(),
            }
        }

        pub fn work_description() -> String {
            "I've worked with a variety of technologies and tools to build cool things. \
             Here are some of the places that work happened."
                .into()
        }

        pub fn work_items() -> Vec<WorkItem> {
            vec![
                WorkItem {
                    title: "Cloud Engineer".into(),
                    company: Company {
                        name: "Cloudwerk Labs".into(),
                        image: "/work/cloudwerk.webp".into(),
                        url: "https://cloudwerk.example.com".into(),
                    },
                    date: "2021 - Present".into(),
                },
                WorkItem {
                    title: "Software Developer".into(),
                    company: Company {
                        name: "Freelance".into(),
                        image: identity::logo(),
                        url: "https://github.com/Arnab-m1".into(),
                    },
                    date: "2019 - 2021".into(),
                },
            ]
        }

        pub fn connect_description() -> String {
            "I'm always interested in meeting new people and learning new things. \
             Feel free to connect with me on any of the following platforms."
                .into()
        }
    }

    pub mod projects {
        use super::super::super::pages::projects::Project;
        use super::super::super::seo::SeoMetadata;
        use super::super::identity;

        pub fn seo() -> SeoMetadata {
            SeoMetadata {
                title: format!("Projects | {}", identity::name()),
                description: subtitle(),
                image: identity::logo(),
            }
        }

        pub fn subtitle() -> String {
            "Check out what I've been working on.".into()
        }

        pub fn projects() -> Vec<Project> {
            vec![
                Project {
                    title: "Cloud Cost Dashboard".into(),
                    description:
                        "Self-hosted dashboard that aggregates spend across AWS accounts and flags anomalies."
                            .into(),
                    image: "/projects/cost-dashboard.webp".into(),
                    year: "2024".into(),
                    url: "https://github.com/Arnab-m1/cloud-cost-dashboard".into(),
                },
                Project {
                    title: "Homelab IaC".into(),
                    description:
                        "Terraform and Ansible modules that rebuild my entire homelab from a single command."
                            .into(),
                    image: "/projects/homelab.webp".into(),
                    year: "2023".into(),
                    url: "https://github.com/Arnab-m1/homelab-iac".into(),
                },
                Project {
                    title: "Uptime Ping".into(),
                    description:
                        "Tiny uptime monitor with email alerts, deployed as a single binary on a free-tier VM."
                            .into(),
                    image: "/projects/uptime-ping.webp".into(),
                    year: "2022".into(),
                    url: "https://github.com/Arnab-m1/uptime-ping".into(),
                },
            ]
        }
    }

    pub mod blog {
        use super::super::super::seo::SeoMetadata;
        use super::super::identity;

        pub fn seo() -> SeoMetadata {
            SeoMetadata {
                title: format!("Blog | {}", identity::name()),
                description: subtitle(),
                image: identity::logo(),
            }
        }

        pub fn subtitle() -> String {
            "Thoughts, stories and ideas.".into()
        }
    }

    pub mod research {
        use super::super::super::seo::SeoMetadata;
        use super::super::identity;

        pub fn seo() -> SeoMetadata {
            SeoMetadata {
                title: format!("Research | {}", identity::name()),
                description: subtitle(),
                image: identity::logo(),
            }
        }

        pub fn subtitle() -> String {
            "Papers, notes and experiments.".into()
        }
    }
}
