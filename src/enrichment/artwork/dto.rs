//! Album search API Data Transfer Objects
//!
//! These types match what the iTunes Search API returns for
//! `GET /search?entity=album`. DO NOT use these types outside the artwork
//! module - convert to domain types.
//!
//! API Reference: https://performance-partners.apple.com/search-api

use serde::{Deserialize, Serialize};

/// Search response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<AlbumResult>,
}

/// One album hit
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResult {
    pub collection_name: Option<String>,
    pub artist_name: Option<String>,
    /// 100x100 artwork; other sizes are reached by rewriting the URL
    pub artwork_url100: Option<String>,
    pub artwork_url60: Option<String>,
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "resultCount": 1,
            "results": [{
                "wrapperType": "collection",
                "collectionType": "Album",
                "artistName": "The Marías",
                "collectionName": "Submarine",
                "artworkUrl60": "https://is1-ssl.mzstatic.com/image/thumb/Music/ab/60x60bb.jpg",
                "artworkUrl100": "https://is1-ssl.mzstatic.com/image/thumb/Music/ab/100x100bb.jpg"
            }]
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.result_count, 1);
        assert_eq!(resp.results[0].collection_name.as_deref(), Some("Submarine"));
        assert!(resp.results[0].artwork_url100.as_deref().unwrap().ends_with("100x100bb.jpg"));
    }

    #[test]
    fn test_parse_empty_response() {
        let resp: SearchResponse = serde_json::from_str(r#"{"resultCount":0,"results":[]}"#).unwrap();
        assert!(resp.results.is_empty());
    }
}
