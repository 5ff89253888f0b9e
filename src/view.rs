// HTML skeleton for the page.
//
// The markup is rendered once on mount and injected with `set_inner_html`.
// Dynamic parts (glow background, skill bars, ticker lines) are updated in
// place afterwards by id or `data-*` lookups, so every hook the wiring code
// needs is emitted here.
use std::fmt::Write;

use crate::constants::*;
use crate::model::*;

#[inline]
fn icon(icon: Icon, size: u32, class: &str) -> String {
    let mut classes = format!("icon icon-{}", icon.css_name());
    if !class.is_empty() {
        classes.push(' ');
        classes.push_str(class);
    }
    format!(
        "<i class=\"{}\" data-icon=\"{}\" style=\"width:{}px;height:{}px\" aria-hidden=\"true\"></i>",
        classes,
        icon.name(),
        size,
        size
    )
}

#[inline]
fn stagger(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f32 * CARD_STAGGER_SEC)
}

pub fn glow_overlay(glow: &PointerGlow) -> String {
    format!(
        "<div id=\"{}\" class=\"fixed inset-0 pointer-events-none opacity-30\" style=\"background: {}\"></div>",
        GLOW_ID,
        glow.background()
    )
}

pub fn skill_card(index: usize, skill: &Skill, hover: &SkillHover) -> String {
    let active = hover.is_active(index);
    let (wrap_extra, icon_class) = if active {
        (" animate-glow", "text-primary")
    } else {
        ("", "text-muted-foreground")
    };
    format!(
        concat!(
            "<div class=\"skill-card card p-6 cursor-pointer transition-all duration-300 hover:scale-110 animate-float border-2 border-border hover:border-primary\" data-skill-index=\"{idx}\" style=\"{delay}\">",
            "<div class=\"flex flex-col items-center gap-3\">",
            "<div class=\"skill-icon p-4 rounded-full{wrap}\">{icon}</div>",
            "<span class=\"font-semibold text-sm\">{name}</span>",
            "<div class=\"w-full bg-muted rounded-full h-2 overflow-hidden\">",
            "<div class=\"skill-bar h-full {bg} transition-all\" style=\"width: {width}; transition-duration: {ms}ms\"></div>",
            "</div></div></div>"
        ),
        idx = index,
        delay = stagger(index),
        wrap = wrap_extra,
        icon = icon(skill.icon, 32, icon_class),
        name = skill.name,
        bg = skill.color.bg_class(),
        width = hover.bar_width(index),
        ms = SKILL_BAR_TRANSITION_MS,
    )
}

pub fn hero(hover: &SkillHover) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        concat!(
            "<section class=\"relative min-h-screen flex items-center justify-center px-4\">",
            "<div class=\"container mx-auto text-center\">",
            "<div class=\"animate-fade-in-up\">",
            "<img id=\"{img_id}\" src=\"{img}\" alt=\"{title}\" class=\"mx-auto mb-8 w-40 h-40 rounded-full object-cover border-4 border-primary\" loading=\"eager\">",
            "<h1 class=\"text-6xl md:text-8xl font-bold mb-6 bg-gradient-to-r from-primary via-secondary to-accent bg-clip-text text-transparent\">{title}</h1>",
            "<p class=\"text-xl md:text-2xl text-muted-foreground mb-8\">{tagline}</p>",
            "<div class=\"flex gap-4 justify-center flex-wrap\">",
            "<button id=\"{cta_p}\" type=\"button\" class=\"btn btn-lg group relative overflow-hidden\">",
            "<span class=\"relative z-10\">{cta_p_text}</span>",
            "<div class=\"absolute inset-0 bg-gradient-to-r from-primary to-secondary opacity-0 group-hover:opacity-100 transition-opacity\"></div>",
            "</button>",
            "<button id=\"{cta_c}\" type=\"button\" class=\"btn btn-lg btn-outline hover:scale-105 transition-transform\">{cta_c_text}</button>",
            "</div></div>",
            "<div class=\"grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4 mt-20\">"
        ),
        img_id = HERO_IMAGE_ID,
        img = HERO_IMAGE_URL,
        title = HERO_TITLE,
        tagline = HERO_TAGLINE,
        cta_p = CTA_PROJECTS_ID,
        cta_p_text = HERO_CTA_PROJECTS,
        cta_c = CTA_CONTACT_ID,
        cta_c_text = HERO_CTA_CONTACT,
    );
    for (i, skill) in SKILLS.iter().enumerate() {
        out.push_str(&skill_card(i, skill, hover));
    }
    out.push_str("</div></div></section>");
    out
}

pub fn project_card(index: usize, project: &Project) -> String {
    format!(
        concat!(
            "<div class=\"card p-8 group cursor-pointer transition-all duration-300 hover:scale-105 hover:shadow-2xl animate-fade-in-up border-2 border-border hover:border-secondary\" style=\"{delay}\">",
            "<div class=\"mb-6 flex justify-center\">",
            "<div class=\"p-6 rounded-full bg-card-foreground/5 group-hover:bg-secondary/20 transition-colors\">{icon}</div>",
            "</div>",
            "<h3 class=\"text-2xl font-bold mb-2 group-hover:text-secondary transition-colors\">{title}</h3>",
            "<p class=\"text-sm text-accent mb-4 font-semibold\">{tech}</p>",
            "<p class=\"text-muted-foreground\">{desc}</p>",
            "<div class=\"mt-6 flex items-center gap-2 text-primary group-hover:gap-4 transition-all\">",
            "<span class=\"text-sm font-semibold\">{more}</span>{arrow}",
            "</div></div>"
        ),
        delay = stagger(index),
        icon = icon(
            project.icon,
            48,
            "text-secondary group-hover:scale-110 transition-transform"
        ),
        title = project.title,
        tech = project.tech,
        desc = project.description,
        more = PROJECT_MORE,
        arrow = icon(Icon::ArrowRight, 20, ""),
    )
}

pub fn projects() -> String {
    let mut out = format!(
        concat!(
            "<section id=\"{id}\" class=\"py-20 px-4 relative\"><div class=\"container mx-auto\">",
            "<h2 class=\"text-5xl font-bold text-center mb-16 animate-fade-in\">{heading}</h2>",
            "<div class=\"grid md:grid-cols-3 gap-8\">"
        ),
        id = PROJECTS_ID,
        heading = PROJECTS_HEADING,
    );
    for (i, p) in PROJECTS.iter().enumerate() {
        out.push_str(&project_card(i, p));
    }
    out.push_str("</div></div></section>");
    out
}

/// Code ticker container; lines are appended by the timer.
pub fn ticker() -> String {
    format!(
        "<section class=\"py-12 px-4 relative\"><div class=\"container mx-auto max-w-3xl\"><div id=\"{}\" class=\"code-ticker font-mono whitespace-pre text-sm text-primary/80 overflow-hidden\" aria-hidden=\"true\"></div></div></section>",
        TICKER_ID
    )
}

// Form has no action and the button never submits.
pub fn contact() -> String {
    format!(
        concat!(
            "<section id=\"{id}\" class=\"py-20 px-4 relative\"><div class=\"container mx-auto max-w-2xl\">",
            "<div class=\"card p-10 animate-scale-in border-2 border-border\">",
            "<h2 class=\"text-4xl font-bold text-center mb-8\">{heading}</h2>",
            "<p class=\"text-center text-muted-foreground mb-8\">{lead}</p>",
            "<form class=\"space-y-6\">",
            "<div><input name=\"name\" type=\"text\" placeholder=\"{name_ph}\" class=\"input h-12 border-2 focus:border-primary transition-colors\"></div>",
            "<div><input name=\"email\" type=\"email\" placeholder=\"{email_ph}\" class=\"input h-12 border-2 focus:border-primary transition-colors\"></div>",
            "<div><textarea name=\"message\" placeholder=\"{msg_ph}\" class=\"textarea min-h-32 border-2 focus:border-primary transition-colors resize-none\"></textarea></div>",
            "<button type=\"button\" class=\"btn btn-lg w-full group relative overflow-hidden h-12\">",
            "<span class=\"relative z-10 flex items-center justify-center gap-2\">{submit}{send}</span>",
            "<div class=\"absolute inset-0 bg-gradient-to-r from-primary via-secondary to-accent opacity-0 group-hover:opacity-100 transition-opacity\"></div>",
            "</button></form></div></div></section>"
        ),
        id = CONTACT_ID,
        heading = CONTACT_HEADING,
        lead = CONTACT_LEAD,
        name_ph = CONTACT_NAME_PLACEHOLDER,
        email_ph = CONTACT_EMAIL_PLACEHOLDER,
        msg_ph = CONTACT_MESSAGE_PLACEHOLDER,
        submit = CONTACT_SUBMIT,
        send = icon(
            Icon::Send,
            20,
            "group-hover:translate-x-1 transition-transform"
        ),
    )
}

pub fn footer() -> String {
    let mut out = String::from(
        "<footer class=\"py-8 text-center border-t border-border\"><div class=\"container mx-auto px-4\"><div class=\"flex justify-center gap-6 mb-4\">",
    );
    for link in SOCIAL_LINKS {
        _ = write!(
            out,
            "<button type=\"button\" aria-label=\"{}\" class=\"btn btn-ghost btn-icon {} hover:scale-110 transition-all\">{}</button>",
            link.label,
            link.color.hover_text_class(),
            icon(link.icon, 24, "")
        );
    }
    _ = write!(
        out,
        "</div><p class=\"text-muted-foreground text-sm\">{}</p></div></footer>",
        FOOTER_COPYRIGHT
    );
    out
}

/// Whole page markup for the given initial state.
pub fn page(glow: &PointerGlow, hover: &SkillHover) -> String {
    let mut out =
        String::from("<div class=\"min-h-screen bg-background text-foreground overflow-hidden\">");
    out.push_str(&glow_overlay(glow));
    out.push_str(&hero(hover));
    out.push_str(&projects());
    out.push_str(&ticker());
    out.push_str(&contact());
    out.push_str(&footer());
    out.push_str("</div>");
    out
}
