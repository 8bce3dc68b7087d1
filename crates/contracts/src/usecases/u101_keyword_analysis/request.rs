use serde::{Deserialize, Serialize};

/// Body of `POST /api/articles/{id}/select-keywords`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectKeywordsRequest {
    pub selected_keywords: Vec<String>,
}

impl SelectKeywordsRequest {
    /// Rejects an empty selection before anything goes over the wire.
    pub fn new(selected_keywords: Vec<String>) -> Result<Self, String> {
        if selected_keywords.is_empty() {
            return Err("少なくとも1つのキーワードを選択してください".to_string());
        }
        Ok(Self { selected_keywords })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_rejected() {
        assert!(SelectKeywordsRequest::new(vec![]).is_err());
        let req = SelectKeywordsRequest::new(vec!["眼鏡".into()]).unwrap();
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"selected_keywords":["眼鏡"]}"#
        );
    }
}
