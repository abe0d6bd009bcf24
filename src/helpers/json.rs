use actix_web::web;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

#[derive(Debug)]
pub struct JsonResponseBuilder<T> {
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn ok(self, message: &str) -> web::Json<JsonResponse<T>> {
        let message = if message.trim().is_empty() {
            String::from("OK")
        } else {
            message.to_string()
        };

        web::Json(JsonResponse {
            message,
            id: self.id,
            item: self.item,
            list: self.list,
        })
    }
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_falls_back_to_ok() {
        let response = JsonResponse::<u32>::build().set_item(7).ok(" ");
        assert_eq!("OK", response.message);
        assert_eq!(Some(7), response.item);
        assert!(response.list.is_none());
    }

    #[test]
    fn absent_parts_are_not_serialized() {
        let response = JsonResponse::<u32>::build()
            .set_id("abc")
            .set_list(vec![1, 2])
            .ok("Listed");
        let value = serde_json::to_value(&response.0).unwrap();

        assert_eq!(
            serde_json::json!({"message": "Listed", "id": "abc", "list": [1, 2]}),
            value
        );
    }
}
