//! Static site catalog
//!
//! Fixed content that seeds the public pages and the admin form: the
//! per-category service lists, the three workers, and the team roster.
//! None of this is persisted; editing it means editing this file.

use super::gallery::ServiceMode;
use serde::Serialize;

/// A specific offering within one of the two categories
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceDescriptor {
    pub title: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
}

/// Aluminium fabrication and glazing offerings
pub const ALUMINIUM_SERVICES: &[ServiceDescriptor] = &[
    ServiceDescriptor {
        title: "Sliding Windows",
        blurb: "Smooth operation, durable frames.",
        image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&q=80&w=800",
    },
    ServiceDescriptor {
        title: "Sliding Doors",
        blurb: "Space-saving elegant designs.",
        image: "https://images.unsplash.com/photo-1600607686527-6fb886090705?auto=format&fit=crop&q=80&w=800",
    },
    ServiceDescriptor {
        title: "Office Partitions",
        blurb: "Modern aluminum & glass cabins.",
        image: "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80&w=800",
    },
    ServiceDescriptor {
        title: "Toughened Glass",
        blurb: "High safety and strength glazing.",
        image: "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?auto=format&fit=crop&q=80&w=800",
    },
    ServiceDescriptor {
        title: "Mosquito Mesh",
        blurb: "Durable protection nets.",
        image: "https://images.unsplash.com/photo-1504198458649-3128b932f49e?auto=format&fit=crop&q=80&w=800",
    },
    ServiceDescriptor {
        title: "Fabrication",
        blurb: "Custom industrial aluminium work.",
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=800",
    },
];

/// Interior painting and finishing offerings
pub const PAINTING_SERVICES: &[ServiceDescriptor] = &[
    ServiceDescriptor {
        title: "Wall Painting",
        blurb: "Premium interior & exterior finishes.",
        image: "https://images.unsplash.com/photo-1589939705384-5185137a7f0f?auto=format&fit=crop&q=80&w=800",
    },
    ServiceDescriptor {
        title: "False Ceiling",
        blurb: "Gypsum & POP decorative ceilings.",
        image: "https://images.unsplash.com/photo-1594445339843-162eb995a56d?auto=format&fit=crop&q=80&w=800",
    },
    ServiceDescriptor {
        title: "Wall Putty",
        blurb: "Smooth base for perfect finish.",
        image: "https://images.unsplash.com/photo-1562259949-e8e7689d7828?auto=format&fit=crop&q=80&w=800",
    },
    ServiceDescriptor {
        title: "POP Work",
        blurb: "Intricate designs and moldings.",
        image: "https://images.unsplash.com/photo-1600585154526-990dced4db0d?auto=format&fit=crop&q=80&w=800",
    },
    ServiceDescriptor {
        title: "Exterior Painting",
        blurb: "Weather-proof long lasting coats.",
        image: "https://images.unsplash.com/photo-1523217582562-09d0def993a6?auto=format&fit=crop&q=80&w=800",
    },
    ServiceDescriptor {
        title: "Texture Design",
        blurb: "Artistic wall textures and stencils.",
        image: "https://images.unsplash.com/photo-1560185007-cde436f6a4d0?auto=format&fit=crop&q=80&w=800",
    },
];

/// The three workers posts and enquiries can reference
pub const WORKERS: &[&str] = &["Shankar Soni", "MANOJ SONI", "Santosh Soni"];

/// A member of the team section
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

/// The family behind the shop, shown in the About section
pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Shankar Soni",
        role: "Aluminum work",
        bio: "Master of fabrication with 25+ years experience.",
        image: "https://fxwryouedphlotunmzbq.supabase.co/storage/v1/object/public/gallery-images/shankarsoni.jpg",
    },
    TeamMember {
        name: "Manoj soni",
        role: "Civil work",
        bio: "Expert in texture, color theory and finishes.",
        image: "https://fxwryouedphlotunmzbq.supabase.co/storage/v1/object/public/gallery-images/manojsoni.jpg",
    },
    TeamMember {
        name: "Santosh Soni",
        role: "Civil work",
        bio: "Expert in texture, color theory and finishes.",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=600",
    },
];

/// The service list for one category
pub fn services_for(mode: ServiceMode) -> &'static [ServiceDescriptor] {
    match mode {
        ServiceMode::Aluminium => ALUMINIUM_SERVICES,
        ServiceMode::Painting => PAINTING_SERVICES,
    }
}

/// Service titles offered under the given category filter; `None` means
/// both categories combined (the "all" filter).
pub fn service_titles(category: Option<ServiceMode>) -> Vec<&'static str> {
    match category {
        Some(mode) => services_for(mode).iter().map(|s| s.title).collect(),
        None => ALUMINIUM_SERVICES
            .iter()
            .chain(PAINTING_SERVICES.iter())
            .map(|s| s.title)
            .collect(),
    }
}

/// Whether a worker name is one of the known three
pub fn is_known_worker(name: &str) -> bool {
    WORKERS.iter().any(|w| *w == name)
}
