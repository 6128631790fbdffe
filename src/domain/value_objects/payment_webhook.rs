use serde::{Deserialize, Deserializer};

/// Inbound payment-provider notification (IPN) body. The provider is loose
/// about numeric fields, so ids are accepted as either JSON numbers or
/// strings. `order_description` carries the buyer's Discord user id, set by
/// the purchase flow when the payment link is opened.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentWebhook {
    pub payment_status: String,
    #[serde(default, deserialize_with = "string_from_any")]
    pub payment_id: Option<String>,
    #[serde(default, deserialize_with = "i32_from_any")]
    pub purchase_id: Option<i32>,
    #[serde(default)]
    pub order_description: Option<String>,
    pub order_id: String,
    #[serde(default)]
    pub pay_address: Option<String>,
}

fn string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn i32_from_any<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::PaymentWebhook;

    #[test]
    fn accepts_numeric_and_string_ids() {
        let numeric: PaymentWebhook = serde_json::from_str(
            r#"{"payment_status":"finished","payment_id":5077125441,"purchase_id":1,"order_id":"O-1"}"#,
        )
        .unwrap();
        assert_eq!(numeric.payment_id.as_deref(), Some("5077125441"));
        assert_eq!(numeric.purchase_id, Some(1));

        let stringly: PaymentWebhook = serde_json::from_str(
            r#"{"payment_status":"finished","payment_id":"5077125441","purchase_id":"1","order_id":"O-1"}"#,
        )
        .unwrap();
        assert_eq!(stringly.payment_id.as_deref(), Some("5077125441"));
        assert_eq!(stringly.purchase_id, Some(1));
    }

    #[test]
    fn missing_optional_fields_stay_none() {
        let payload: PaymentWebhook =
            serde_json::from_str(r#"{"payment_status":"waiting","order_id":"O-2"}"#).unwrap();
        assert!(payload.payment_id.is_none());
        assert!(payload.purchase_id.is_none());
        assert!(payload.order_description.is_none());
        assert!(payload.pay_address.is_none());
    }
}
