//! Catalog Data
//!
//! Static lists behind the carousels, the wizard tiles and the page sections.

use crate::models::{
    Benefit, BenefitIcon, Category, HowItWorksStep, Item, Testimonial, VideoEntry,
};

pub const PLANNERS: &[Item] = &[
    Item { id: "1", name: "Agenda Floral Soft", category: Category::Planner, image: "/agenda_real.jpg" },
    Item { id: "2", name: "Planner Executivo", category: Category::Planner, image: "/agenda_real.jpg" },
    Item { id: "3", name: "Agenda Clean Tone", category: Category::Planner, image: "/agenda_real.jpg" },
];

pub const NOTEBOOKS: &[Item] = &[
    Item { id: "4", name: "Caderno Dinossauro", category: Category::Notebook, image: "/hero_dino.jpg" },
    Item { id: "5", name: "Caderno Homem-Aranha", category: Category::Notebook, image: "/hero_spider.jpg" },
    Item { id: "6", name: "Caderno Sonic", category: Category::Notebook, image: "/hero_sonic.jpg" },
    Item { id: "7", name: "Caderno Meninas", category: Category::Notebook, image: "/hero_girls.jpg" },
    Item { id: "8", name: "Caderno Unicórnio", category: Category::Notebook, image: "/hero_unicorn.jpg" },
];

pub const PARTY_KITS: &[Item] = &[
    Item { id: "f1", name: "Kits Temáticos", category: Category::PartyKit, image: "/festa_1.jpg" },
    Item { id: "f2", name: "Caixas com Visor", category: Category::PartyKit, image: "/festa_3.jpg" },
    Item { id: "f3", name: "Caixas Milk", category: Category::PartyKit, image: "/festa_2.jpg" },
    Item { id: "f4", name: "Personalizados de Luxo", category: Category::PartyKit, image: "/festa_4.jpg" },
];

pub const HERO_IMAGES: &[&str] = &[
    "/hero_dino.jpg",
    "/hero_spider.jpg",
    "/hero_sonic.jpg",
    "/hero_girls.jpg",
    "/hero_unicorn.jpg",
    "/festa_1.jpg",
    "/festa_2.jpg",
    "/festa_3.jpg",
    "/festa_4.jpg",
    "/agenda_real.jpg",
];

pub const VIDEOS: &[VideoEntry] = &[
    VideoEntry { title: "Agenda Personalizada", media: "/video_agenda.mp4.mp4", poster: "/agenda_real.jpg" },
    VideoEntry { title: "Caderno Temático", media: "/video_caderno.mp4.mp4", poster: "/hero_spider.jpg" },
    VideoEntry { title: "Kit Festa Completo", media: "/video_festa.mp4.mp4", poster: "/festa_1.jpg" },
];

// Step-1 tiles of the wizard

pub const PLANNER_TILE: Item = Item {
    id: "agenda",
    name: "Agenda 2026",
    category: Category::Planner,
    image: "/agenda_real.jpg",
};

pub const NOTEBOOK_TILE: Item = Item {
    id: "caderno",
    name: "Caderno Escolar",
    category: Category::Notebook,
    image: "/hero_spider.jpg",
};

pub const PARTY_KIT_TILE: Item = Item {
    id: "festa",
    name: "Kit Festa Personalizado",
    category: Category::PartyKit,
    image: "/festa_1.jpg",
};

/// Item used by the "create the perfect kit" button
pub const CUSTOM_PARTY_KIT: Item = Item {
    id: "party-custom",
    name: "Kit Festa Personalizado",
    category: Category::PartyKit,
    image: "/festa_1.jpg",
};

pub const BENEFITS: &[Benefit] = &[
    Benefit { icon: BenefitIcon::Palette, title: "100% Personalizável", description: "Capa, miolo e detalhes" },
    Benefit { icon: BenefitIcon::Heart, title: "Feito à Mão", description: "Produção artesanal cuidadosa" },
    Benefit { icon: BenefitIcon::Gift, title: "Presente Perfeito", description: "Embalagem pronta para dar" },
    Benefit { icon: BenefitIcon::Truck, title: "Entrega Segura", description: "Para todo o Brasil" },
    Benefit { icon: BenefitIcon::Chat, title: "Atendimento VIP", description: "Suporte personalizado" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Mariana S.",
        role: "Estudante de Design",
        text: "A qualidade desse planner é surreal! O papel é grossinho e a capa ficou exatamente como eu queria.",
    },
    Testimonial {
        author: "Carla Eventos",
        role: "Organizadora",
        text: "Meus clientes sempre elogiam as lembrancinhas da Entre Linhas. Acabamento impecável e entrega no prazo.",
    },
    Testimonial {
        author: "Beatriz M.",
        role: "Cliente Fiel",
        text: "Já é o terceiro caderno que compro. O atendimento no WhatsApp é super atencioso e carinhoso.",
    },
];

pub const HOW_IT_WORKS: &[HowItWorksStep] = &[
    HowItWorksStep { number: "01", title: "Escolha", description: "Selecione o produto e o modelo base" },
    HowItWorksStep { number: "02", title: "Crie", description: "Envie seu nome, frase ou tema" },
    HowItWorksStep { number: "03", title: "Aprove", description: "Receba uma prévia digital no WhatsApp" },
    HowItWorksStep { number: "04", title: "Receba", description: "Produção e envio com muito carinho" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut seen = HashSet::new();
        for item in PLANNERS.iter().chain(NOTEBOOKS).chain(PARTY_KITS) {
            assert!(seen.insert(item.id), "duplicate id {}", item.id);
        }
    }

    #[test]
    fn test_catalog_lists_match_their_category() {
        assert!(PLANNERS.iter().all(|i| i.category == Category::Planner));
        assert!(NOTEBOOKS.iter().all(|i| i.category == Category::Notebook));
        assert!(PARTY_KITS.iter().all(|i| i.category == Category::PartyKit));
        assert!(!HERO_IMAGES.is_empty());
        assert_eq!(VIDEOS.len(), 3);
    }
}
