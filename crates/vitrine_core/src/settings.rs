//! Site settings: the single document behind the landing page.
//!
//! Each section is a typed struct with discrete setters. Numeric setters clamp
//! to the ranges the admin sliders expose, so a settings document built through
//! them is always renderable.

use crate::{Icon, Language, TranslatableText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! layout_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)? } default $default:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
            strum::EnumIter, strum::EnumString, strum::Display,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                #[strum(serialize = $value)]
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

layout_enum! {
    /// Vertical placement of the hero content.
    VerticalAlign {
        /// Top of the viewport
        Top => "top",
        /// Centered
        Center => "center",
        /// Bottom of the viewport
        Bottom => "bottom",
    } default Center
}

layout_enum! {
    /// Horizontal placement of the hero content.
    HorizontalAlign {
        /// Left aligned
        Left => "left",
        /// Centered
        Center => "center",
        /// Right aligned
        Right => "right",
    } default Center
}

layout_enum! {
    /// Font weight for hero headings.
    FontWeight {
        /// Regular
        Normal => "normal",
        /// Medium
        Medium => "medium",
        /// Semibold
        Semibold => "semibold",
        /// Bold
        Bold => "bold",
    } default Bold
}

layout_enum! {
    /// Size of the hero call-to-action button.
    CtaSize {
        /// Small
        Small => "small",
        /// Medium
        Medium => "medium",
        /// Large
        Large => "large",
        /// Extra large
        XLarge => "xlarge",
    } default Large
}

layout_enum! {
    /// Where the logo sits in the navigation bar.
    LogoPosition {
        /// Left
        Left => "left",
        /// Center
        Center => "center",
        /// Right
        Right => "right",
    } default Left
}

layout_enum! {
    /// Hover effect applied to the logo.
    HoverEffect {
        /// No effect
        None => "none",
        /// Scale up slightly
        Grow => "grow",
        /// Glow
        Glow => "glow",
        /// Gentle rotation
        Rotate => "rotate",
    } default None
}

/// Hero section: headline, video background and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSettings {
    /// Headline
    pub title: TranslatableText,
    /// Sub-headline
    pub subtitle: TranslatableText,
    /// Call-to-action label
    pub cta_text: TranslatableText,
    /// Background video
    pub video_url: String,
    /// Vertical placement
    pub vertical_align: VerticalAlign,
    /// Vertical offset in pixels (-200..=200)
    pub vertical_offset: i32,
    /// Horizontal placement
    pub horizontal_align: HorizontalAlign,
    /// Headline size in pixels (24..=72)
    pub title_size: u32,
    /// Headline weight
    pub title_weight: FontWeight,
    /// Render the headline in upper case
    pub title_uppercase: bool,
    /// Headline max width in pixels
    pub title_max_width: u32,
    /// Sub-headline size in pixels (14..=32)
    pub subtitle_size: u32,
    /// Sub-headline weight
    pub subtitle_weight: FontWeight,
    /// Sub-headline max width in pixels
    pub subtitle_max_width: u32,
    /// Button size
    pub cta_size: CtaSize,
    /// Button style name
    pub cta_style: String,
    /// Overlay opacity percentage (0..=100)
    pub overlay_opacity: u32,
    /// Overlay color
    pub overlay_color: String,
    /// Video zoom percentage (100..=150)
    pub video_zoom: u32,
    /// Play the entrance animation
    pub animation_enabled: bool,
    /// Entrance animation name
    pub animation_type: String,
}

impl Default for HeroSettings {
    fn default() -> Self {
        Self {
            title: TranslatableText::new(
                "Conectando o Mundo através do Comércio Internacional",
                "Connecting the World Through International Trade",
                "Conectando el Mundo a través del Comercio Internacional",
            ),
            subtitle: TranslatableText::new(
                "Soluções completas em importação e exportação",
                "Complete import and export solutions",
                "Soluciones completas en importación y exportación",
            ),
            cta_text: TranslatableText::new(
                "Fale com um Especialista",
                "Talk to a Specialist",
                "Hable con un Especialista",
            ),
            video_url: "https://videos.pexels.com/video-files/3226072/3226072-hd_1920_1080_24fps.mp4"
                .to_string(),
            vertical_align: VerticalAlign::Center,
            vertical_offset: 0,
            horizontal_align: HorizontalAlign::Center,
            title_size: 48,
            title_weight: FontWeight::Bold,
            title_uppercase: true,
            title_max_width: 800,
            subtitle_size: 20,
            subtitle_weight: FontWeight::Normal,
            subtitle_max_width: 700,
            cta_size: CtaSize::Large,
            cta_style: "filled".to_string(),
            overlay_opacity: 60,
            overlay_color: "#000000".to_string(),
            video_zoom: 100,
            animation_enabled: true,
            animation_type: "fade-up".to_string(),
        }
    }
}

impl HeroSettings {
    /// Set the headline for one language.
    pub fn set_title(&mut self, language: Language, text: impl Into<String>) -> &mut Self {
        self.title.set(language, text);
        self
    }

    /// Set the sub-headline for one language.
    pub fn set_subtitle(&mut self, language: Language, text: impl Into<String>) -> &mut Self {
        self.subtitle.set(language, text);
        self
    }

    /// Set the call-to-action label for one language.
    pub fn set_cta_text(&mut self, language: Language, text: impl Into<String>) -> &mut Self {
        self.cta_text.set(language, text);
        self
    }

    /// Set the background video.
    pub fn set_video_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.video_url = url.into();
        self
    }

    /// Set vertical placement.
    pub fn set_vertical_align(&mut self, align: VerticalAlign) -> &mut Self {
        self.vertical_align = align;
        self
    }

    /// Set the vertical offset, clamped to -200..=200.
    pub fn set_vertical_offset(&mut self, offset: i32) -> &mut Self {
        self.vertical_offset = offset.clamp(-200, 200);
        self
    }

    /// Set horizontal placement.
    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) -> &mut Self {
        self.horizontal_align = align;
        self
    }

    /// Set the headline size, clamped to 24..=72.
    pub fn set_title_size(&mut self, size: u32) -> &mut Self {
        self.title_size = size.clamp(24, 72);
        self
    }

    /// Set the headline weight.
    pub fn set_title_weight(&mut self, weight: FontWeight) -> &mut Self {
        self.title_weight = weight;
        self
    }

    /// Toggle upper-case headline.
    pub fn set_title_uppercase(&mut self, uppercase: bool) -> &mut Self {
        self.title_uppercase = uppercase;
        self
    }

    /// Set the sub-headline size, clamped to 14..=32.
    pub fn set_subtitle_size(&mut self, size: u32) -> &mut Self {
        self.subtitle_size = size.clamp(14, 32);
        self
    }

    /// Set the button size.
    pub fn set_cta_size(&mut self, size: CtaSize) -> &mut Self {
        self.cta_size = size;
        self
    }

    /// Set overlay opacity, clamped to 0..=100.
    pub fn set_overlay_opacity(&mut self, opacity: u32) -> &mut Self {
        self.overlay_opacity = opacity.min(100);
        self
    }

    /// Set overlay color.
    pub fn set_overlay_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.overlay_color = color.into();
        self
    }

    /// Set video zoom, clamped to 100..=150.
    pub fn set_video_zoom(&mut self, zoom: u32) -> &mut Self {
        self.video_zoom = zoom.clamp(100, 150);
        self
    }

    /// Toggle the entrance animation.
    pub fn set_animation_enabled(&mut self, enabled: bool) -> &mut Self {
        self.animation_enabled = enabled;
        self
    }
}

/// About section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSettings {
    /// Section title
    pub title: TranslatableText,
    /// First paragraph
    pub paragraph1: TranslatableText,
    /// Second paragraph
    pub paragraph2: TranslatableText,
    /// Side image
    pub image_url: String,
}

impl Default for AboutSettings {
    fn default() -> Self {
        Self {
            title: TranslatableText::new("Sobre a Star Trade", "About Star Trade", "Acerca de Star Trade"),
            paragraph1: TranslatableText::new(
                "A Star Trade é uma trading company especializada em soluções completas de importação e exportação.",
                "Star Trade is a trading company specialized in complete import and export solutions.",
                "Star Trade es una empresa comercializadora especializada en soluciones completas de importación y exportación.",
            ),
            paragraph2: TranslatableText::new(
                "Oferecemos assessoria completa: desde a cotação até a entrega final.",
                "We offer complete advisory: from quotation to final delivery.",
                "Ofrecemos asesoría completa: desde la cotización hasta la entrega final.",
            ),
            image_url: "https://images.unsplash.com/photo-1703194531119-e8b98a555cb6?q=85&w=1000&auto=format&fit=crop"
                .to_string(),
        }
    }
}

impl AboutSettings {
    /// Set the title for one language.
    pub fn set_title(&mut self, language: Language, text: impl Into<String>) -> &mut Self {
        self.title.set(language, text);
        self
    }

    /// Set the first paragraph for one language.
    pub fn set_paragraph1(&mut self, language: Language, text: impl Into<String>) -> &mut Self {
        self.paragraph1.set(language, text);
        self
    }

    /// Set the second paragraph for one language.
    pub fn set_paragraph2(&mut self, language: Language, text: impl Into<String>) -> &mut Self {
        self.paragraph2.set(language, text);
        self
    }

    /// Set the side image.
    pub fn set_image_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.image_url = url.into();
        self
    }
}

/// Size presets offered next to the logo width sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display)]
pub enum LogoPreset {
    /// 120 / 100 / 80
    #[display("small")]
    Small,
    /// 180 / 150 / 120
    #[display("medium")]
    Medium,
    /// 250 / 200 / 160
    #[display("large")]
    Large,
    /// 350 / 280 / 180
    #[display("xlarge")]
    XLarge,
}

impl LogoPreset {
    /// Desktop, tablet and mobile widths for this preset.
    pub fn widths(&self) -> (u32, u32, u32) {
        match self {
            LogoPreset::Small => (120, 100, 80),
            LogoPreset::Medium => (180, 150, 120),
            LogoPreset::Large => (250, 200, 160),
            LogoPreset::XLarge => (350, 280, 180),
        }
    }
}

/// Logo sizing and behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoSettings {
    /// Desktop width (50..=400)
    pub desktop_width: u32,
    /// Desktop height, 0 means auto
    pub desktop_height: u32,
    /// Tablet width (50..=300)
    pub tablet_width: u32,
    /// Mobile width (40..=200)
    pub mobile_width: u32,
    /// Position in the navigation bar
    pub position: LogoPosition,
    /// Left margin in pixels
    pub margin_left: u32,
    /// Right margin in pixels
    pub margin_right: u32,
    /// Shrink when the page scrolls
    pub shrink_on_scroll: bool,
    /// Width after shrinking (50..=200)
    pub scroll_width: u32,
    /// Brightness percentage (50..=150)
    pub brightness: u32,
    /// Hover effect
    pub hover_effect: HoverEffect,
}

impl Default for LogoSettings {
    fn default() -> Self {
        Self {
            desktop_width: 180,
            desktop_height: 0,
            tablet_width: 150,
            mobile_width: 120,
            position: LogoPosition::Left,
            margin_left: 24,
            margin_right: 24,
            shrink_on_scroll: true,
            scroll_width: 120,
            brightness: 100,
            hover_effect: HoverEffect::None,
        }
    }
}

impl LogoSettings {
    /// Set the desktop width, clamped to 50..=400.
    pub fn set_desktop_width(&mut self, width: u32) -> &mut Self {
        self.desktop_width = width.clamp(50, 400);
        self
    }

    /// Set the tablet width, clamped to 50..=300.
    pub fn set_tablet_width(&mut self, width: u32) -> &mut Self {
        self.tablet_width = width.clamp(50, 300);
        self
    }

    /// Set the mobile width, clamped to 40..=200.
    pub fn set_mobile_width(&mut self, width: u32) -> &mut Self {
        self.mobile_width = width.clamp(40, 200);
        self
    }

    /// Apply all three widths of a preset.
    pub fn apply_preset(&mut self, preset: LogoPreset) -> &mut Self {
        let (desktop, tablet, mobile) = preset.widths();
        self.set_desktop_width(desktop)
            .set_tablet_width(tablet)
            .set_mobile_width(mobile)
    }

    /// Set the logo position.
    pub fn set_position(&mut self, position: LogoPosition) -> &mut Self {
        self.position = position;
        self
    }

    /// Toggle shrink-on-scroll.
    pub fn set_shrink_on_scroll(&mut self, shrink: bool) -> &mut Self {
        self.shrink_on_scroll = shrink;
        self
    }

    /// Set the shrunk width, clamped to 50..=200.
    pub fn set_scroll_width(&mut self, width: u32) -> &mut Self {
        self.scroll_width = width.clamp(50, 200);
        self
    }

    /// Set brightness, clamped to 50..=150.
    pub fn set_brightness(&mut self, brightness: u32) -> &mut Self {
        self.brightness = brightness.clamp(50, 150);
        self
    }

    /// Set the hover effect.
    pub fn set_hover_effect(&mut self, effect: HoverEffect) -> &mut Self {
        self.hover_effect = effect;
        self
    }
}

/// A "why choose us" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferentialCard {
    /// Stable identifier
    pub id: String,
    /// Icon name as stored by the backend
    pub icon: String,
    /// Card title
    #[serde(default)]
    pub title: TranslatableText,
    /// Card body
    #[serde(default)]
    pub description: TranslatableText,
    /// Display order
    #[serde(default)]
    pub order: i32,
}

impl DifferentialCard {
    /// Resolved icon, falling back to [`Icon::DEFAULT`] for unknown names.
    pub fn icon(&self) -> Icon {
        Icon::resolve(&self.icon)
    }
}

/// A headline number ("500+ imports").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    /// Stable identifier
    pub id: String,
    /// Displayed value, e.g. "500+"
    pub value: String,
    /// Caption
    #[serde(default)]
    pub label: TranslatableText,
    /// Display order
    #[serde(default)]
    pub order: i32,
}

impl StatItem {
    /// Numeric target and trailing suffix for the count-up animation.
    ///
    /// ```
    /// use vitrine_core::{StatItem, TranslatableText};
    ///
    /// let stat = StatItem { id: "1".into(), value: "1500+".into(), label: TranslatableText::default(), order: 0 };
    /// assert_eq!(stat.animation_target(), (1500, "+".to_string()));
    /// ```
    pub fn animation_target(&self) -> (u64, String) {
        let digits: String = self.value.chars().filter(|c| c.is_ascii_digit()).collect();
        let target = digits.parse().unwrap_or(0);
        let suffix: String = self
            .value
            .trim_start_matches(|c: char| !c.is_ascii_digit())
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .to_string();
        (target, suffix)
    }
}

/// Contact details and social links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    /// Street address
    pub address: String,
    /// Phone number
    pub phone: String,
    /// E-mail address
    pub email: String,
    /// WhatsApp number in any format
    pub whatsapp: String,
    /// LinkedIn URL
    pub linkedin: String,
    /// Instagram URL
    pub instagram: String,
    /// Facebook URL
    pub facebook: String,
    /// YouTube URL
    pub youtube: String,
    /// TikTok URL
    pub tiktok: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            address: "Av. Paulista, 1000 - Bela Vista, São Paulo - SP, 01310-100".to_string(),
            phone: "+55 (11) 99999-9999".to_string(),
            email: "contato@startrade.com.br".to_string(),
            whatsapp: "+5511999999999".to_string(),
            linkedin: "https://linkedin.com/company/startrade".to_string(),
            instagram: "https://instagram.com/startrade".to_string(),
            facebook: "https://facebook.com/startrade".to_string(),
            youtube: String::new(),
            tiktok: String::new(),
        }
    }
}

impl ContactInfo {
    /// Click-to-chat link built from the digits of the WhatsApp number.
    ///
    /// ```
    /// use vitrine_core::ContactInfo;
    ///
    /// let contact = ContactInfo { whatsapp: "+55 (11) 99999-9999".into(), ..Default::default() };
    /// assert_eq!(contact.whatsapp_link().as_deref(), Some("https://wa.me/5511999999999"));
    /// ```
    pub fn whatsapp_link(&self) -> Option<String> {
        let digits: String = self.whatsapp.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            None
        } else {
            Some(format!("https://wa.me/{}", digits))
        }
    }

    /// Non-empty social links as (network, url) pairs.
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("linkedin", self.linkedin.as_str()),
            ("instagram", self.instagram.as_str()),
            ("facebook", self.facebook.as_str()),
            ("youtube", self.youtube.as_str()),
            ("tiktok", self.tiktok.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
        .collect()
    }

    /// Set the address.
    pub fn set_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.address = address.into();
        self
    }

    /// Set the phone number.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> &mut Self {
        self.phone = phone.into();
        self
    }

    /// Set the e-mail address.
    pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.email = email.into();
        self
    }

    /// Set the WhatsApp number.
    pub fn set_whatsapp(&mut self, whatsapp: impl Into<String>) -> &mut Self {
        self.whatsapp = whatsapp.into();
        self
    }

    /// Set the LinkedIn URL.
    pub fn set_linkedin(&mut self, url: impl Into<String>) -> &mut Self {
        self.linkedin = url.into();
        self
    }

    /// Set the Instagram URL.
    pub fn set_instagram(&mut self, url: impl Into<String>) -> &mut Self {
        self.instagram = url.into();
        self
    }

    /// Set the Facebook URL.
    pub fn set_facebook(&mut self, url: impl Into<String>) -> &mut Self {
        self.facebook = url.into();
        self
    }

    /// Set the YouTube URL.
    pub fn set_youtube(&mut self, url: impl Into<String>) -> &mut Self {
        self.youtube = url.into();
        self
    }
}

/// Brand colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteColors {
    /// Primary brand color
    pub primary: String,
    /// Accent color
    pub secondary: String,
    /// Page background
    pub background: String,
    /// Main text color
    pub text_primary: String,
}

impl Default for SiteColors {
    fn default() -> Self {
        Self {
            primary: "#1E3A8A".to_string(),
            secondary: "#D4AF37".to_string(),
            background: "#FFFFFF".to_string(),
            text_primary: "#0F172A".to_string(),
        }
    }
}

impl SiteColors {
    /// Set the primary color.
    pub fn set_primary(&mut self, color: impl Into<String>) -> &mut Self {
        self.primary = color.into();
        self
    }

    /// Set the accent color.
    pub fn set_secondary(&mut self, color: impl Into<String>) -> &mut Self {
        self.secondary = color.into();
        self
    }
}

/// The whole site settings document.
///
/// Missing sections deserialize to their defaults, so documents saved by
/// older versions of the admin still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Document id (always "site_settings")
    pub id: String,
    /// Logo for light backgrounds
    pub logo_url: String,
    /// Logo for dark backgrounds
    pub logo_dark_url: String,
    /// Favicon
    pub favicon_url: String,
    /// Logo sizing
    pub logo_settings: LogoSettings,
    /// Hero section
    pub hero: HeroSettings,
    /// About section
    pub about: AboutSettings,
    /// Differential cards
    pub differentials: Vec<DifferentialCard>,
    /// Headline numbers
    pub stats: Vec<StatItem>,
    /// Contact details
    pub contact: ContactInfo,
    /// Brand colors
    pub colors: SiteColors,
    /// Language served when the visitor has not chosen one
    pub default_language: Language,
    /// Last save time
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: "site_settings".to_string(),
            logo_url: String::new(),
            logo_dark_url: String::new(),
            favicon_url: String::new(),
            logo_settings: LogoSettings::default(),
            hero: HeroSettings::default(),
            about: AboutSettings::default(),
            differentials: Vec::new(),
            stats: Vec::new(),
            contact: ContactInfo::default(),
            colors: SiteColors::default(),
            default_language: Language::Pt,
            updated_at: None,
        }
    }
}

impl SiteSettings {
    /// Set the light-background logo.
    pub fn set_logo_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.logo_url = url.into();
        self
    }

    /// Set the dark-background logo.
    pub fn set_logo_dark_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.logo_dark_url = url.into();
        self
    }

    /// Set the favicon.
    pub fn set_favicon_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.favicon_url = url.into();
        self
    }

    /// Set the default language.
    pub fn set_default_language(&mut self, language: Language) -> &mut Self {
        self.default_language = language;
        self
    }

    /// Differential cards in display order.
    pub fn sorted_differentials(&self) -> Vec<&DifferentialCard> {
        let mut cards: Vec<_> = self.differentials.iter().collect();
        cards.sort_by_key(|card| card.order);
        cards
    }

    /// Stats in display order.
    pub fn sorted_stats(&self) -> Vec<&StatItem> {
        let mut stats: Vec<_> = self.stats.iter().collect();
        stats.sort_by_key(|stat| stat.order);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_document_fills_defaults() {
        let settings: SiteSettings = serde_json::from_str(
            r#"{"hero": {"title": "Legacy title"}, "default_language": "en"}"#,
        )
        .unwrap();
        assert_eq!(settings.hero.title.get(Language::Es), "Legacy title");
        assert_eq!(settings.hero.title_size, 48);
        assert_eq!(settings.logo_settings.desktop_width, 180);
        assert_eq!(settings.default_language, Language::En);
    }

    #[test]
    fn setters_clamp_to_slider_ranges() {
        let mut hero = HeroSettings::default();
        hero.set_title_size(100).set_vertical_offset(-500).set_video_zoom(10);
        assert_eq!(hero.title_size, 72);
        assert_eq!(hero.vertical_offset, -200);
        assert_eq!(hero.video_zoom, 100);

        let mut logo = LogoSettings::default();
        logo.apply_preset(LogoPreset::XLarge).set_brightness(10);
        assert_eq!((logo.desktop_width, logo.tablet_width, logo.mobile_width), (350, 280, 180));
        assert_eq!(logo.brightness, 50);
    }

    #[test]
    fn stat_without_digits_animates_from_zero() {
        let stat = StatItem {
            id: "s".into(),
            value: "many".into(),
            label: TranslatableText::default(),
            order: 0,
        };
        assert_eq!(stat.animation_target().0, 0);
    }
}
