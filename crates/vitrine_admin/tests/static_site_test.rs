//! Rendering the static site from a config file.

use std::io::Write;
use vitrine_admin::{StaticRenderer, StaticSiteConfig};
use vitrine_core::Language;

const CONFIG: &str = r#"{
    "site": {"logo": "logo.png", "language": "en"},
    "hero": {"title": {"pt": "Bem-vindo", "en": "Welcome", "es": ""}, "cta_text": "Fale conosco"},
    "about": {"title": "Sobre <nós>", "image": "about.jpg"},
    "areas": [
        {"image": "agro.jpg", "title": {"pt": "Agro", "en": "Farming"}, "is_specialty": true},
        {"image": "log.jpg", "title": "Logística"}
    ],
    "stats": [{"value": "500+", "label": {"pt": "Projetos", "en": "Projects"}}],
    "contact": {"whatsapp": "+55 11 97777-6666", "linkedin": "https://linkedin.com/company/x"}
}"#;

#[tokio::test]
async fn renders_a_config_file_in_the_configured_language() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();

    let config = StaticSiteConfig::load(file.path()).await.unwrap();
    let site = StaticRenderer::new(&config, None).render();

    assert_eq!(*site.language(), Language::En);
    assert!(site.hero().contains("<h1>Welcome</h1>"));
    assert!(site.hero().contains("Fale conosco"));
    assert!(site.about().contains("Sobre &lt;nós&gt;"));
    assert!(site.areas().contains("Farming"));
    assert!(site.areas().contains(r#"<span class="area-badge specialty">Our Specialty</span>"#));
    assert!(site.areas().contains(r#"<span class="area-badge">Sector</span>"#));
    assert!(site.stats().contains("Projects"));
    assert!(site.contact().contains("https://wa.me/5511977776666"));
    assert!(site.contact().contains(r#"href="https://linkedin.com/company/x""#));
    assert!(site.to_html().starts_with(r#"<section class="hero">"#));
}

#[tokio::test]
async fn explicit_language_and_fallbacks() {
    let config = StaticSiteConfig::from_json(CONFIG).unwrap();
    let site = StaticRenderer::new(&config, Some(Language::Es)).render();

    assert!(site.hero().contains("<h1>Bem-vindo</h1>"));
    assert!(site.areas().contains("Nuestra Especialidad"));
}

#[tokio::test]
async fn missing_file_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StaticSiteConfig::load(&dir.path().join("config.json"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}
