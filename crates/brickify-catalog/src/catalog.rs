//! Part catalog queries.

use brickify_core::Part;

use crate::api::ApiClient;
use crate::error::CatalogResult;

/// Read access to the part catalog.
pub trait PartCatalog {
    /// Every part in the catalog.
    fn list_all(&self) -> CatalogResult<Vec<Part>>;

    /// The part with the given id.
    fn get_by_id(&self, id: &str) -> CatalogResult<Part>;

    /// Parts matching a free-text query.
    fn search(&self, query: &str) -> CatalogResult<Vec<Part>>;

    /// Parts in one category.
    fn list_by_category(&self, category: &str) -> CatalogResult<Vec<Part>>;

    /// All category names.
    fn list_categories(&self) -> CatalogResult<Vec<String>>;
}

/// Catalog served by the backend's REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: ApiClient,
}

impl HttpCatalog {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

}

impl PartCatalog for HttpCatalog {
    fn list_all(&self) -> CatalogResult<Vec<Part>> {
        self.client.get("/api/lego/parts")
    }

    fn get_by_id(&self, id: &str) -> CatalogResult<Part> {
        self.client.get_path(&["api", "lego", "parts", id])
    }

    fn search(&self, query: &str) -> CatalogResult<Vec<Part>> {
        self.client
            .get_with_query("/api/lego/parts/search", &[("q", query)])
    }

    fn list_by_category(&self, category: &str) -> CatalogResult<Vec<Part>> {
        self.client
            .get_path(&["api", "lego", "parts", "category", category])
    }

    fn list_categories(&self) -> CatalogResult<Vec<String>> {
        self.client.get("/api/lego/categories")
    }
}

/// Catalog front used by the editor.
///
/// Backend failures are logged and degrade to an empty result.
#[derive(Debug, Clone)]
pub struct PartService<C> {
    catalog: C,
}

impl<C: PartCatalog> PartService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// The wrapped catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn all_parts(&self) -> Vec<Part> {
        self.catalog
            .list_all()
            .unwrap_or_else(|e| empty_on_error("list parts", &e))
    }

    pub fn part_by_id(&self, id: &str) -> Option<Part> {
        match self.catalog.get_by_id(id) {
            Ok(part) => Some(part),
            Err(e) => {
                log::warn!("failed to fetch part '{id}': {e}");
                None
            }
        }
    }

    pub fn search_parts(&self, query: &str) -> Vec<Part> {
        self.catalog
            .search(query)
            .unwrap_or_else(|e| empty_on_error("search parts", &e))
    }

    pub fn parts_by_category(&self, category: &str) -> Vec<Part> {
        self.catalog
            .list_by_category(category)
            .unwrap_or_else(|e| empty_on_error("list parts by category", &e))
    }

    pub fn all_categories(&self) -> Vec<String> {
        self.catalog
            .list_categories()
            .unwrap_or_else(|e| empty_on_error("list categories", &e))
    }
}

fn empty_on_error<T>(what: &str, error: &crate::CatalogError) -> Vec<T> {
    log::warn!("failed to {what}: {error}");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::test_server::OneShotServer;
    use std::time::Duration;

    struct FixedCatalog {
        parts: Vec<Part>,
    }

    impl PartCatalog for FixedCatalog {
        fn list_all(&self) -> CatalogResult<Vec<Part>> {
            Ok(self.parts.clone())
        }

        fn get_by_id(&self, id: &str) -> CatalogResult<Part> {
            self.parts
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(CatalogError::Status(404))
        }

        fn search(&self, query: &str) -> CatalogResult<Vec<Part>> {
            Ok(self
                .parts
                .iter()
                .filter(|p| p.name.contains(query))
                .cloned()
                .collect())
        }

        fn list_by_category(&self, category: &str) -> CatalogResult<Vec<Part>> {
            Ok(self
                .parts
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect())
        }

        fn list_categories(&self) -> CatalogResult<Vec<String>> {
            let mut categories: Vec<String> =
                self.parts.iter().map(|p| p.category.clone()).collect();
            categories.dedup();
            Ok(categories)
        }
    }

    struct BrokenCatalog;

    impl PartCatalog for BrokenCatalog {
        fn list_all(&self) -> CatalogResult<Vec<Part>> {
            Err(CatalogError::Status(500))
        }

        fn get_by_id(&self, _id: &str) -> CatalogResult<Part> {
            Err(CatalogError::Transport("connection refused".to_string()))
        }

        fn search(&self, _query: &str) -> CatalogResult<Vec<Part>> {
            Err(CatalogError::Status(503))
        }

        fn list_by_category(&self, _category: &str) -> CatalogResult<Vec<Part>> {
            Err(CatalogError::Transport("timed out".to_string()))
        }

        fn list_categories(&self) -> CatalogResult<Vec<String>> {
            Err(CatalogError::Status(502))
        }
    }

    fn fixed() -> PartService<FixedCatalog> {
        PartService::new(FixedCatalog {
            parts: vec![
                Part::new("3001", "Brick 2x4").with_category("Bricks"),
                Part::new("3003", "Brick 2x2").with_category("Bricks"),
                Part::new("3710", "Plate 1x4").with_category("Plates"),
            ],
        })
    }

    #[test]
    fn test_service_passes_results_through() {
        let service = fixed();
        assert_eq!(service.all_parts().len(), 3);
        assert_eq!(service.search_parts("Brick").len(), 2);
        assert_eq!(service.parts_by_category("Plates")[0].id, "3710");
        assert_eq!(service.all_categories(), vec!["Bricks", "Plates"]);
        assert_eq!(service.part_by_id("3003").unwrap().name, "Brick 2x2");
    }

    #[test]
    fn test_service_fails_open() {
        let service = PartService::new(BrokenCatalog);
        assert!(service.all_parts().is_empty());
        assert!(service.part_by_id("3001").is_none());
        assert!(service.search_parts("brick").is_empty());
        assert!(service.parts_by_category("Bricks").is_empty());
        assert!(service.all_categories().is_empty());
    }

    fn category_request_line(category: &str) -> String {
        let server = OneShotServer::respond("200 OK", "[]");
        let parts = HttpCatalog::new(server.client())
            .list_by_category(category)
            .unwrap();
        assert!(parts.is_empty());
        server.finish().request_line
    }

    #[test]
    fn test_category_is_sent_as_one_path_segment() {
        assert_eq!(
            category_request_line("Slopes #2"),
            "GET /api/lego/parts/category/Slopes%20%232 HTTP/1.1"
        );
        assert_eq!(
            category_request_line("Technic/Beams"),
            "GET /api/lego/parts/category/Technic%2FBeams HTTP/1.1"
        );
        assert_eq!(
            category_request_line("a?b=c"),
            "GET /api/lego/parts/category/a%3Fb=c HTTP/1.1"
        );
    }

    #[test]
    fn test_part_id_is_encoded() {
        let server = OneShotServer::respond("200 OK", r#"{"id": "3001 b", "name": "Brick 2x4"}"#);
        let part = HttpCatalog::new(server.client()).get_by_id("3001 b").unwrap();
        assert_eq!(part.name, "Brick 2x4");
        assert_eq!(
            server.finish().request_line,
            "GET /api/lego/parts/3001%20b HTTP/1.1"
        );
    }

    #[test]
    fn test_http_catalog_unreachable_degrades_to_empty() {
        let client = ApiClient::new("http://127.0.0.1:1", Duration::from_millis(500));
        let service = PartService::new(HttpCatalog::new(client));
        assert!(service.all_parts().is_empty());
        assert!(service.search_parts("2x4 brick").is_empty());
    }
}
