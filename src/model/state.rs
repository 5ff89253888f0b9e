// Ephemeral UI state: pointer position for the glow overlay and the
// hovered skill for the skills grid.
//
// Both types are last-write-wins value holders. They carry no history and
// never touch the DOM; the wasm side reads them after each event.

use glam::Vec2;

use crate::constants::{GLOW_FADE_STOP_PCT, GLOW_RADIUS_PX, GLOW_RGBA, SKILL_LEVEL_MAX};

use super::content::Skill;

/// Latest pointer coordinates in CSS pixels, unclamped.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerGlow {
    pub pos: Vec2,
}

impl PointerGlow {
    #[inline]
    pub fn on_move(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// CSS `background` value for the overlay centred on the pointer.
    pub fn background(&self) -> String {
        let [r, g, b, a] = GLOW_RGBA;
        format!(
            "radial-gradient({}px at {}px {}px, rgba({}, {}, {}, {}), transparent {}%)",
            GLOW_RADIUS_PX, self.pos.x, self.pos.y, r, g, b, a, GLOW_FADE_STOP_PCT
        )
    }
}

/// Which skill card, if any, is under the pointer.
#[derive(Clone, Debug)]
pub struct SkillHover {
    skills: &'static [Skill],
    active: Option<usize>,
}

impl SkillHover {
    pub fn new(skills: &'static [Skill]) -> Self {
        debug_assert!(skills.iter().all(|s| s.level <= SKILL_LEVEL_MAX));
        Self {
            skills,
            active: None,
        }
    }

    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Mark `index` as hovered. Returns the previously active index so the
    /// caller can reset that card. Out-of-range indices leave state untouched.
    pub fn enter(&mut self, index: usize) -> Option<usize> {
        if index >= self.skills.len() {
            log::debug!("[hover] ignoring out-of-range skill index {}", index);
            return self.active;
        }
        self.active.replace(index)
    }

    /// Clear the hovered skill, returning the one that was active.
    pub fn leave(&mut self) -> Option<usize> {
        self.active.take()
    }

    /// Target width of the proficiency bar for card `index`.
    pub fn bar_width(&self, index: usize) -> String {
        match self.skills.get(index) {
            Some(skill) if self.is_active(index) => format!("{}%", skill.level),
            _ => "0%".to_string(),
        }
    }
}
