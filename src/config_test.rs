use super::*;

const MINIMAL: &str = r#"{
    "contact": { "recipient": "someone@example.com" },
    "map": {
        "latitude": 1.5,
        "longitude": 2.5,
        "zoom": 10,
        "tile_url": "https://tiles.example/{z}/{x}/{y}.png",
        "attribution": "tiles",
        "popup_html": "<b>hi</b>"
    },
    "experiences": []
}"#;

#[test]
fn embedded_site_content_parses() {
    let cfg = SiteConfig::embedded().unwrap();
    assert_eq!(cfg.contact.recipient, "andreisantossaldivar@gmail.com");
    assert_eq!(cfg.map.zoom, 15.0);
    assert_eq!(cfg.map.attribution, "© OpenStreetMap contributors");
}

#[test]
fn embedded_experiences_keep_file_order() {
    let cfg = SiteConfig::embedded().unwrap();
    let roles = cfg.experiences.iter().map(|e| e.role.as_str()).collect::<Vec<_>>();
    assert_eq!(roles, vec!["OJT Aircraft Mechanic", "Research Lead & Developer"]);
    assert_eq!(cfg.experiences[1].period, "2019 - 2020");
}

#[test]
fn tuning_sections_default_when_absent() {
    let cfg = SiteConfig::from_json(MINIMAL).unwrap();
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
    assert_eq!(cfg.reveal, RevealSettings::default());
    assert_eq!(cfg.particles, ParticleSettings::default());
    assert_eq!(cfg.carousel.interval_ms, 5_000);
}

#[test]
fn partial_tuning_section_keeps_other_defaults() {
    let raw = MINIMAL.replacen('{', r#"{ "particles": { "opacity": 0.5 }, "carousel": { "interval_ms": 250 },"#, 1);
    let cfg = SiteConfig::from_json(&raw).unwrap();
    assert_eq!(cfg.particles.opacity, 0.5);
    assert_eq!(cfg.particles.area_per_particle, DEFAULT_AREA_PER_PARTICLE);
    assert_eq!(cfg.carousel.interval_ms, 250);
}

#[test]
fn missing_contact_section_is_an_error() {
    let err = SiteConfig::from_json(r#"{ "experiences": [] }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid site content"));
}

#[test]
fn reveal_selector_query_joins_with_commas() {
    let reveal = RevealSettings::default();
    assert_eq!(reveal.selector_query(), ".section-title, .card, .timeline-item, .gallery-item, .hero-buttons");
    assert_eq!(reveal.threshold, 0.1);
}

#[test]
fn log_level_falls_back_to_info() {
    let mut cfg = SiteConfig::from_json(MINIMAL).unwrap();
    assert_eq!(cfg.log_level(), log::Level::Info);
    cfg.log_level = "DEBUG".to_owned();
    assert_eq!(cfg.log_level(), log::Level::Debug);
    cfg.log_level = "chatty".to_owned();
    assert_eq!(cfg.log_level(), log::Level::Info);
}
