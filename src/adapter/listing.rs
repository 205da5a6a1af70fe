// Legacy listing interface and the adapter that satisfies it

use crate::adapter::catalog::CatalogService;

/// The interface the legacy client was written against
pub trait ProductListing {
    fn product_names(&self) -> Vec<String>;
}

/// Adapts CatalogService to the legacy listing interface
pub struct CatalogAdapter {
    service: CatalogService,
}

impl CatalogAdapter {
    pub fn new(service: CatalogService) -> Self {
        Self { service }
    }
}

impl ProductListing for CatalogAdapter {
    fn product_names(&self) -> Vec<String> {
        self.service
            .fetch_products()
            .iter()
            .map(|product| product.name.clone())
            .collect()
    }
}

/// The legacy client, unchanged: it only knows ProductListing
pub struct CatalogClient {
    source: Box<dyn ProductListing>,
}

impl CatalogClient {
    pub fn new(source: Box<dyn ProductListing>) -> Self {
        Self { source }
    }

    /// The one line the old UI printed
    pub fn listing(&self) -> String {
        format!(
            "Available products: {}",
            self.source.product_names().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_maps_products_to_names() {
        let service = CatalogService::from_json(r#"[{"name":"Apple"},{"name":"Banana"}]"#).unwrap();
        let adapter = CatalogAdapter::new(service);

        assert_eq!(adapter.product_names(), vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_client_works_against_adapted_service() {
        let service = CatalogService::from_json(r#"[{"name":"Apple"},{"name":"Banana"}]"#).unwrap();
        let client = CatalogClient::new(Box::new(CatalogAdapter::new(service)));

        assert_eq!(client.listing(), "Available products: Apple, Banana");
    }

    #[test]
    fn test_client_accepts_any_listing_source() {
        struct FixedListing;

        impl ProductListing for FixedListing {
            fn product_names(&self) -> Vec<String> {
                vec!["Cherry".to_string()]
            }
        }

        let client = CatalogClient::new(Box::new(FixedListing));
        assert_eq!(client.listing(), "Available products: Cherry");
    }
}
