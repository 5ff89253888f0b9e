// Static page content: skills, projects, social links and the snippet pool.
//
// All of it is fixed at compile time. The markup builder and the ticker
// borrow from these tables; nothing here is ever mutated.

/// Symbolic icon identifier. The host stylesheet resolves the glyph from the
/// `icon-<name>` class; `data-icon` keeps the original icon-set name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Blocks,
    Layout,
    Database,
    Box,
    ShoppingCart,
    Store,
    ShoppingBag,
    Building2,
    Newspaper,
    ArrowRight,
    Send,
    Github,
    Linkedin,
    Mail,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Blocks => "Blocks",
            Icon::Layout => "Layout",
            Icon::Database => "Database",
            Icon::Box => "Box",
            Icon::ShoppingCart => "ShoppingCart",
            Icon::Store => "Store",
            Icon::ShoppingBag => "ShoppingBag",
            Icon::Building2 => "Building2",
            Icon::Newspaper => "Newspaper",
            Icon::ArrowRight => "ArrowRight",
            Icon::Send => "Send",
            Icon::Github => "Github",
            Icon::Linkedin => "Linkedin",
            Icon::Mail => "Mail",
        }
    }

    /// Kebab-case class suffix, e.g. `ShoppingCart` -> `shopping-cart`.
    pub fn css_name(self) -> String {
        let mut out = String::new();
        for (i, ch) in self.name().char_indices() {
            if ch.is_ascii_uppercase() && i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        }
        out
    }
}

/// Theme colour token used for skill bars and hover highlights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccentColor {
    Primary,
    Secondary,
    Accent,
}

impl AccentColor {
    #[inline]
    pub fn bg_class(self) -> &'static str {
        match self {
            AccentColor::Primary => "bg-primary",
            AccentColor::Secondary => "bg-secondary",
            AccentColor::Accent => "bg-accent",
        }
    }

    #[inline]
    pub fn hover_text_class(self) -> &'static str {
        match self {
            AccentColor::Primary => "hover:text-primary",
            AccentColor::Secondary => "hover:text-secondary",
            AccentColor::Accent => "hover:text-accent",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    /// Proficiency in percent, 0..=100.
    pub level: u8,
    pub color: AccentColor,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub tech: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: Icon,
    pub color: AccentColor,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "WordPress",
        icon: Icon::Blocks,
        level: 95,
        color: AccentColor::Primary,
    },
    Skill {
        name: "Joomla",
        icon: Icon::Layout,
        level: 88,
        color: AccentColor::Secondary,
    },
    Skill {
        name: "Drupal",
        icon: Icon::Database,
        level: 82,
        color: AccentColor::Accent,
    },
    Skill {
        name: "1C-Bitrix",
        icon: Icon::Box,
        level: 90,
        color: AccentColor::Primary,
    },
    Skill {
        name: "OpenCart",
        icon: Icon::ShoppingCart,
        level: 85,
        color: AccentColor::Secondary,
    },
    Skill {
        name: "PrestaShop",
        icon: Icon::Store,
        level: 80,
        color: AccentColor::Accent,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Platform",
        tech: "WordPress + WooCommerce",
        description: "Интернет-магазин с интеграцией платежных систем",
        icon: Icon::ShoppingBag,
    },
    Project {
        title: "Corporate Website",
        tech: "Joomla + Custom Extensions",
        description: "Корпоративный сайт с модульной архитектурой",
        icon: Icon::Building2,
    },
    Project {
        title: "News Portal",
        tech: "Drupal + Multi-site",
        description: "Новостной портал с мультиязычностью",
        icon: Icon::Newspaper,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon: Icon::Github,
        color: AccentColor::Primary,
    },
    SocialLink {
        label: "LinkedIn",
        icon: Icon::Linkedin,
        color: AccentColor::Secondary,
    },
    SocialLink {
        label: "Email",
        icon: Icon::Mail,
        color: AccentColor::Accent,
    },
];

// Hero and section copy
pub const HERO_TITLE: &str = "Web Developer";
pub const HERO_TAGLINE: &str = "Создаю современные решения на популярных CMS";
pub const HERO_CTA_PROJECTS: &str = "Мои проекты";
pub const HERO_CTA_CONTACT: &str = "Связаться";
pub const PROJECTS_HEADING: &str = "Избранные проекты";
pub const PROJECT_MORE: &str = "Подробнее";
pub const CONTACT_HEADING: &str = "Обсудим проект?";
pub const CONTACT_LEAD: &str = "Свяжитесь со мной, и мы создадим что-то удивительное";
pub const CONTACT_NAME_PLACEHOLDER: &str = "Ваше имя";
pub const CONTACT_EMAIL_PLACEHOLDER: &str = "Email";
pub const CONTACT_MESSAGE_PLACEHOLDER: &str = "Расскажите о проекте";
pub const CONTACT_SUBMIT: &str = "Отправить";
pub const FOOTER_COPYRIGHT: &str = "© 2024 Web Developer Portfolio. Создано с ❤️";

/// Lines the ticker draws from. Must stay non-empty.
pub const CODE_SNIPPETS: &[&str] = &[
    "add_action('init', 'register_portfolio_cpt');",
    "$query = new WP_Query(['post_type' => 'project']);",
    "JFactory::getApplication()->input->get('id');",
    "\\Drupal::entityTypeManager()->getStorage('node');",
    "CModule::IncludeModule('iblock');",
    "$this->load->model('catalog/product');",
    "Configuration::updateValue('PS_SHOP_NAME', $name);",
    "git commit -m \"feat: custom checkout flow\"",
    "composer require drupal/paragraphs",
    "wp plugin activate woocommerce",
    "npm run build -- --mode production",
    "SELECT * FROM wp_posts WHERE post_status = 'publish';",
    "display: grid; grid-template-columns: repeat(6, 1fr);",
    "transition: all 300ms ease-in-out;",
    "fetch('/wp-json/wp/v2/posts').then(r => r.json());",
    "php bin/console cache:clear",
];
