/// Hooks into the server-rendered markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSelectors {
    pub csrf_meta: String,
    pub sort_select_id: String,
    pub like_button: String,
    pub artwork_id_attr: String,
    pub like_icon: String,
    pub likes_count: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            csrf_meta: r#"meta[name="csrf-token"]"#.to_string(),
            sort_select_id: "sort-select".to_string(),
            like_button: ".like-btn".to_string(),
            artwork_id_attr: "data-artwork-id".to_string(),
            like_icon: "i".to_string(),
            likes_count: ".likes-count".to_string(),
        }
    }
}
