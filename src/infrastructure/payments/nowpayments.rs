use anyhow::{Result, anyhow};
use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::domain::value_objects::payment_webhook::PaymentWebhook;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the provider's IPN signature.
pub const IPN_SIGNATURE_HEADER: &str = "x-nowpayments-sig";

/// Verifies payment-provider callbacks before any side effect runs.
///
/// The provider signs the notification body with HMAC-SHA512 over the JSON
/// serialized with its keys sorted. `serde_json` maps keep their keys in
/// sorted order, so re-serializing the parsed body reproduces the signed form
/// regardless of the key order on the wire.
pub struct IpnVerifier {
    ipn_secret: String,
}

impl IpnVerifier {
    pub fn new(ipn_secret: String) -> Self {
        Self { ipn_secret }
    }

    pub fn verify(&self, payload: &[u8], signature: &str) -> Result<PaymentWebhook> {
        let body: serde_json::Value = serde_json::from_slice(payload)?;
        let canonical = serde_json::to_string(&body)?;

        let mut mac = HmacSha512::new_from_slice(self.ipn_secret.as_bytes())?;
        mac.update(canonical.as_bytes());
        let expected = mac.finalize().into_bytes();

        let provided = hex::decode(signature.trim())
            .map_err(|_| anyhow!("ipn signature is not valid hex"))?;

        if expected[..] != provided[..] {
            anyhow::bail!("invalid ipn signature");
        }

        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &str, body: &str) -> String {
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        let canonical = serde_json::to_string(&value).unwrap();
        let mut mac = HmacSha512::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(canonical.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    const BODY: &str = r#"{"payment_status":"finished","payment_id":"p-1","purchase_id":1,"order_id":"O-100","order_description":"123456789012345678","pay_address":"0xabc"}"#;

    #[test]
    fn accepts_correctly_signed_payload() {
        let verifier = IpnVerifier::new("ipn-secret".to_string());
        let signature = sign("ipn-secret", BODY);

        let payload = verifier.verify(BODY.as_bytes(), &signature).unwrap();
        assert_eq!(payload.payment_status, "finished");
        assert_eq!(payload.order_id, "O-100");
        assert_eq!(payload.purchase_id, Some(1));
    }

    #[test]
    fn key_order_on_the_wire_does_not_matter() {
        let reordered = r#"{"pay_address":"0xabc","order_id":"O-100","order_description":"123456789012345678","purchase_id":1,"payment_id":"p-1","payment_status":"finished"}"#;
        let verifier = IpnVerifier::new("ipn-secret".to_string());

        // Signature computed from the sorted form must match either framing.
        let signature = sign("ipn-secret", BODY);
        assert!(verifier.verify(reordered.as_bytes(), &signature).is_ok());
    }

    #[test]
    fn rejects_signature_from_wrong_secret() {
        let verifier = IpnVerifier::new("ipn-secret".to_string());
        let signature = sign("some-other-secret", BODY);

        assert!(verifier.verify(BODY.as_bytes(), &signature).is_err());
    }

    #[test]
    fn rejects_tampered_body() {
        let verifier = IpnVerifier::new("ipn-secret".to_string());
        let signature = sign("ipn-secret", BODY);
        let tampered = BODY.replace("O-100", "O-999");

        assert!(verifier.verify(tampered.as_bytes(), &signature).is_err());
    }

    #[test]
    fn rejects_non_hex_signature() {
        let verifier = IpnVerifier::new("ipn-secret".to_string());

        assert!(verifier.verify(BODY.as_bytes(), "not-hex!").is_err());
    }
}
