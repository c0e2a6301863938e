use serde::{Deserialize, Serialize};

/// The envelope the API wraps around every paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// The type of this resource: `list`.
    pub object: String,
    /// The entries of the current page.
    pub data: Vec<T>,
    /// Whether more entries exist past this page.
    pub has_more: Option<bool>,
    /// The URL this list was fetched from.
    pub url: Option<String>,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Customer;

    #[test]
    fn customer_page() -> crate::Result<()> {
        let payload = r#"
        {
          "object": "list",
          "url": "/v1/customers",
          "has_more": false,
          "data": [
            {
              "id": "cus_4QFJOjw2pOmAGJ",
              "object": "customer",
              "created": 1405641986
            }
          ]
        }
        "#;

        let page = crate::decode::from_str::<List<Customer>>(payload)?;
        assert_eq!("list", page.object);
        assert_eq!(Some(false), page.has_more);
        assert_eq!(1, page.data.len());
        assert_eq!("cus_4QFJOjw2pOmAGJ", page.data[0].id);
        Ok(())
    }
}
