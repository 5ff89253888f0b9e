/// Page tuning constants.
///
/// These keep animation timings and visual magic numbers out of the wiring
/// code. Everything here is plain data so host tests can include it.
// Code ticker
pub const TICK_INTERVAL_MS: i32 = 1500; // period of the snippet timer
pub const TICKER_CAPACITY: usize = 15; // oldest line dropped past this

// Pointer glow
pub const GLOW_RADIUS_PX: u32 = 600;
pub const GLOW_RGBA: [f32; 4] = [139.0, 92.0, 246.0, 0.15]; // violet, low alpha
pub const GLOW_FADE_STOP_PCT: u32 = 80; // transparent beyond this stop

// Card entrance stagger (seconds per card index)
pub const CARD_STAGGER_SEC: f32 = 0.2;

// Skill bar transition length, mirrored in the inline style
pub const SKILL_BAR_TRANSITION_MS: u32 = 1000;

// Skill level bounds (percent)
pub const SKILL_LEVEL_MAX: u8 = 100;

// DOM ids the wiring code looks up after mounting the markup
pub const ROOT_ID: &str = "root";
pub const GLOW_ID: &str = "pointer-glow";
pub const TICKER_ID: &str = "code-ticker";
pub const HERO_IMAGE_ID: &str = "hero-portrait";
pub const PROJECTS_ID: &str = "projects";
pub const CONTACT_ID: &str = "contact";
pub const CTA_PROJECTS_ID: &str = "cta-projects";
pub const CTA_CONTACT_ID: &str = "cta-contact";

// Static portrait shown in the hero banner
pub const HERO_IMAGE_URL: &str = "/assets/portrait.webp";
