//! Session-scoped UI preferences (sidebar expanded sections and scroll
//! offset). Stored in `sessionStorage`: created on first toggle,
//! overwritten on every change, gone when the tab closes.

const EXPANDED_KEY: &str = "ui_expanded_sections";
const SIDEBAR_SCROLL_KEY: &str = "ui_sidebar_scroll";

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// Pure toggle: present → removed, absent → appended.
pub fn toggle_section(mut sections: Vec<String>, name: &str) -> Vec<String> {
    if let Some(position) = sections.iter().position(|s| s == name) {
        sections.remove(position);
    } else {
        sections.push(name.to_string());
    }
    sections
}

pub fn encode_sections(sections: &[String]) -> String {
    serde_json::to_string(sections).unwrap_or_else(|_| "[]".to_string())
}

pub fn decode_sections(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn load_expanded_sections() -> Vec<String> {
    session_storage()
        .and_then(|s| s.get_item(EXPANDED_KEY).ok().flatten())
        .map(|raw| decode_sections(&raw))
        .unwrap_or_default()
}

pub fn save_expanded_sections(sections: &[String]) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(EXPANDED_KEY, &encode_sections(sections));
    }
}

pub fn load_sidebar_scroll() -> f64 {
    session_storage()
        .and_then(|s| s.get_item(SIDEBAR_SCROLL_KEY).ok().flatten())
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0.0)
}

pub fn save_sidebar_scroll(offset: f64) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(SIDEBAR_SCROLL_KEY, &offset.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let sections = toggle_section(Vec::new(), "Laporan");
        assert_eq!(sections, vec!["Laporan".to_string()]);
        let sections = toggle_section(sections, "Master Data");
        assert_eq!(
            sections,
            vec!["Laporan".to_string(), "Master Data".to_string()]
        );
        let sections = toggle_section(sections, "Laporan");
        assert_eq!(sections, vec!["Master Data".to_string()]);
    }

    #[test]
    fn sections_round_trip_through_json() {
        let sections = vec!["Laporan".to_string()];
        let encoded = encode_sections(&sections);
        assert_eq!(encoded, r#"["Laporan"]"#);
        assert_eq!(decode_sections(&encoded), sections);
    }

    #[test]
    fn garbage_decodes_to_empty() {
        assert!(decode_sections("not json").is_empty());
        assert!(decode_sections("{}").is_empty());
    }
}
