use serde::{Deserialize, Serialize};

/// Pagination block as the API returns it: `{ page, total_page, total_item }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub page: usize,
    pub total_page: usize,
    pub total_item: usize,
}

/// Standard list envelope: `{ "data": [...], "paging": {...} }`.
///
/// Endpoints that return a bare object (summaries, single records) may skip
/// the envelope; the frontend decoder tries both shapes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// One decoded page of a listing.
#[derive(Clone, Debug, PartialEq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> ListResult<T> {
    /// Build from an envelope, clamping `page` into `[1, total_pages]`.
    /// A missing paging block means a single unpaginated page.
    pub fn from_envelope(envelope: Envelope<Vec<T>>) -> Self {
        let count = envelope.data.len();
        let paging = envelope.paging.unwrap_or(Paging {
            page: 1,
            total_page: 1,
            total_item: count,
        });
        let total_pages = paging.total_page.max(1);
        Self {
            items: envelope.data,
            page: paging.page.clamp(1, total_pages),
            total_pages,
            total_items: paging.total_item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
    struct Named {
        id: i64,
        name: String,
    }

    #[test]
    fn decodes_list_envelope() {
        let body = r#"{"data":[{"id":1,"name":"Shoes"}],"paging":{"page":1,"total_page":1,"total_item":1}}"#;
        let envelope: Envelope<Vec<Named>> = serde_json::from_str(body).unwrap();
        let result = ListResult::from_envelope(envelope);
        assert_eq!(
            result.items,
            vec![Named {
                id: 1,
                name: "Shoes".to_string()
            }]
        );
        assert_eq!(result.page, 1);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.total_items, 1);
    }

    #[test]
    fn clamps_page_into_range() {
        let envelope = Envelope {
            data: Vec::<Named>::new(),
            paging: Some(Paging {
                page: 9,
                total_page: 3,
                total_item: 25,
            }),
        };
        let result = ListResult::from_envelope(envelope);
        assert_eq!(result.page, 3);

        let envelope = Envelope {
            data: Vec::<Named>::new(),
            paging: Some(Paging {
                page: 0,
                total_page: 0,
                total_item: 0,
            }),
        };
        let result = ListResult::from_envelope(envelope);
        assert_eq!(result.page, 1);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn missing_paging_means_single_page() {
        let body = r#"{"data":[{"id":1,"name":"A"},{"id":2,"name":"B"}]}"#;
        let envelope: Envelope<Vec<Named>> = serde_json::from_str(body).unwrap();
        let result = ListResult::from_envelope(envelope);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.total_items, 2);
    }
}
