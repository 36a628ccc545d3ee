//! Product operations: list, create, delete.
//!
//! Products are owned by the remote service; the client never mutates one
//! in place. After any mutation callers refetch the whole list.

use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResult, ShopClient};

/// A sellable item record owned by the remote service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Server-assigned opaque identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

/// Payload for product creation.
///
/// `price` is already a parsed decimal here; construct it via
/// [`super::parse_price`] so raw user text never reaches the wire.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl NewProduct {
    /// Builds a creation payload, validating the name client-side.
    pub fn new(name: &str, price: f64, description: &str) -> ApiResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Product name is required"));
        }
        Ok(Self {
            name: name.to_string(),
            price,
            description: description.trim().to_string(),
        })
    }
}

impl ShopClient {
    /// Fetches the full product collection.
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        let response = self
            .http()
            .get(self.url("/api/products"))
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;
        let response = Self::check(response).await?;
        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::new(super::ApiErrorKind::Server, e.to_string()))
    }

    /// Creates a product. The response body is ignored beyond success.
    pub async fn create_product(&self, product: &NewProduct) -> ApiResult<()> {
        let response = self
            .http()
            .post(self.url("/api/products"))
            .json(product)
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;
        Self::check(response).await?;
        Ok(())
    }

    /// Deletes a product by identifier.
    ///
    /// An unknown identifier surfaces as a server error ("Product not
    /// found" from the response body).
    pub async fn delete_product(&self, id: &str) -> ApiResult<()> {
        let response = self
            .http()
            .delete(self.url(&format!("/api/products/{id}")))
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_new_product_rejects_empty_name() {
        let err = NewProduct::new("  ", 1.0, "desc").unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Validation);
    }

    #[test]
    fn test_product_deserializes_server_shape() {
        let json = r#"{"_id": "abc123", "name": "Mug", "price": 9.5, "description": "Ceramic"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "abc123");
        assert_eq!(product.price, 9.5);
    }

    #[test]
    fn test_product_description_defaults_to_empty() {
        let json = r#"{"_id": "x", "name": "Mug", "price": 1.0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description, "");
    }

    #[tokio::test]
    async fn test_list_products() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"_id": "1", "name": "Mug", "price": 9.99, "description": "Ceramic"},
                {"_id": "2", "name": "Shirt", "price": 19.99, "description": ""}
            ])))
            .mount(&server)
            .await;

        let client = ShopClient::with_base_url(server.uri());
        let products = client.list_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Mug");
        assert_eq!(products[1].price, 19.99);
    }

    #[tokio::test]
    async fn test_list_products_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"message": "Error fetching products"})),
            )
            .mount(&server)
            .await;

        let client = ShopClient::with_base_url(server.uri());
        let err = client.list_products().await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.message, "Error fetching products");
    }

    #[tokio::test]
    async fn test_create_product_sends_numeric_price() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/products"))
            .and(body_json(serde_json::json!({
                "name": "Mug",
                "price": 19.99,
                "description": "Ceramic"
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = ShopClient::with_base_url(server.uri());
        let price = crate::api::parse_price("19.99").unwrap();
        let product = NewProduct::new("Mug", price, "Ceramic").unwrap();
        client.create_product(&product).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_product_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/products/missing"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "Product not found"})),
            )
            .mount(&server)
            .await;

        let client = ShopClient::with_base_url(server.uri());
        let err = client.delete_product("missing").await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.message, "Product not found");
    }

    #[tokio::test]
    async fn test_network_error_kind() {
        // Nothing listens on this port.
        let client = ShopClient::with_base_url("http://127.0.0.1:1");
        let err = client.list_products().await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Network);
    }
}
