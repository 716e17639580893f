use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentFees {
    pub fixed: f64,
    /// Percent of the amount, e.g. `1.5` for 1.5 %
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub icon: String,
    pub description: String,
    pub manual_approval: bool,
    pub auto_verification: bool,
    pub blockchain_enabled: bool,
    pub supported_currencies: Vec<String>,
    pub processing_time: String,
    pub fees: PaymentFees,
}

impl PaymentMethod {
    pub fn fee_for(&self, amount: f64) -> f64 {
        self.fees.fixed + amount * self.fees.percentage / 100.0
    }
}

/// An ERC-20 style token accepted for stablecoin payments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StablecoinToken {
    pub symbol: String,
    pub contract_address: String,
    pub decimals: u8,
    pub network: String,
}

impl StablecoinToken {
    fn new(symbol: &str, contract_address: &str, decimals: u8, network: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            contract_address: contract_address.to_string(),
            decimals,
            network: network.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StablecoinConfig {
    pub enabled: bool,
    pub supported_networks: Vec<String>,
    pub supported_tokens: Vec<StablecoinToken>,
    pub webhook_url: Option<String>,
    /// Top-ups at or below this amount skip manual review
    pub auto_approval_threshold: f64,
}

impl StablecoinConfig {
    pub fn token(&self, symbol: &str) -> Option<&StablecoinToken> {
        self.supported_tokens.iter().find(|t| t.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn supports_network(&self, network: &str) -> bool {
        self.supported_networks.iter().any(|n| n == network)
    }
}

impl Default for StablecoinConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            supported_networks: vec![
                "ethereum".to_string(),
                "polygon".to_string(),
                "bsc".to_string(),
            ],
            supported_tokens: vec![
                StablecoinToken::new("USDC", "0xA0b86a33E6C6240d17E78CD98D3B6b4F8C8d9E9A", 6, "ethereum"),
                StablecoinToken::new("USDT", "0xdAC17F958D2ee523a2206206994597C13D831ec7", 6, "ethereum"),
                StablecoinToken::new("DAI", "0x6B175474E89094C44Da98b954EedeAC495271d0F", 18, "ethereum"),
            ],
            webhook_url: None,
            auto_approval_threshold: 1000.0,
        }
    }
}

/// Payment methods accepted for wallet top-ups and bookings
#[derive(Debug, Clone)]
pub struct PaymentCatalog {
    methods: Vec<PaymentMethod>,
    stablecoin: StablecoinConfig,
}

impl PaymentCatalog {
    pub fn with_stablecoin(stablecoin: StablecoinConfig) -> Self {
        Self {
            methods: default_methods(),
            stablecoin,
        }
    }

    pub fn methods(&self) -> &[PaymentMethod] {
        &self.methods
    }

    pub fn stablecoin(&self) -> &StablecoinConfig {
        &self.stablecoin
    }

    pub fn get(&self, id: &str) -> Option<&PaymentMethod> {
        self.methods.iter().find(|m| m.id == id)
    }

    pub fn is_stablecoin(&self, id: &str) -> bool {
        self.get(id).is_some_and(|m| m.blockchain_enabled)
    }

    pub fn processing_fee(&self, id: &str, amount: f64) -> CoreResult<f64> {
        if amount.is_nan() || amount < 0.0 {
            return Err(CoreError::ValidationError(format!("invalid amount {}", amount)));
        }

        self.get(id)
            .map(|m| m.fee_for(amount))
            .ok_or_else(|| CoreError::UnknownPaymentMethod(id.to_string()))
    }

    pub fn should_auto_approve(&self, amount: f64, id: &str) -> bool {
        if !self.stablecoin.enabled || !self.is_stablecoin(id) {
            return false;
        }
        amount <= self.stablecoin.auto_approval_threshold
    }
}

impl Default for PaymentCatalog {
    fn default() -> Self {
        Self::with_stablecoin(StablecoinConfig::default())
    }
}

fn default_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "bank_transfer".to_string(),
            name: "bank_transfer".to_string(),
            display_name: "Bank Transfer".to_string(),
            icon: "🏦".to_string(),
            description: "Traditional wire transfer or ACH payment".to_string(),
            manual_approval: true,
            auto_verification: false,
            blockchain_enabled: false,
            supported_currencies: Vec::new(),
            processing_time: "1-3 business days".to_string(),
            fees: PaymentFees::default(),
        },
        PaymentMethod {
            id: "cryptocurrency".to_string(),
            name: "cryptocurrency".to_string(),
            display_name: "Cryptocurrency".to_string(),
            icon: "🪙".to_string(),
            description: "Digital currency payments (stablecoin ready)".to_string(),
            manual_approval: true,
            auto_verification: false,
            blockchain_enabled: true,
            supported_currencies: vec!["USDC".to_string(), "USDT".to_string(), "DAI".to_string()],
            processing_time: "Instant (pending integration)".to_string(),
            fees: PaymentFees { fixed: 0.0, percentage: 0.5 },
        },
        PaymentMethod {
            id: "mobile_money".to_string(),
            name: "mobile_money".to_string(),
            display_name: "Mobile Money".to_string(),
            icon: "📱".to_string(),
            description: "Local mobile payment solutions".to_string(),
            manual_approval: true,
            auto_verification: false,
            blockchain_enabled: false,
            supported_currencies: Vec::new(),
            processing_time: "Same day".to_string(),
            fees: PaymentFees { fixed: 0.0, percentage: 1.5 },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_fees() {
        let catalog = PaymentCatalog::default();
        assert_eq!(catalog.processing_fee("bank_transfer", 1000.0).unwrap(), 0.0);
        assert_eq!(catalog.processing_fee("cryptocurrency", 1000.0).unwrap(), 5.0);
        assert_eq!(catalog.processing_fee("mobile_money", 1000.0).unwrap(), 15.0);
    }

    #[test]
    fn test_unknown_method() {
        let catalog = PaymentCatalog::default();
        assert!(matches!(
            catalog.processing_fee("cheque", 10.0),
            Err(CoreError::UnknownPaymentMethod(id)) if id == "cheque"
        ));
        assert!(!catalog.is_stablecoin("cheque"));
    }

    #[test]
    fn test_invalid_amount() {
        let catalog = PaymentCatalog::default();
        assert!(matches!(
            catalog.processing_fee("mobile_money", -5.0),
            Err(CoreError::ValidationError(_))
        ));
        assert!(catalog.processing_fee("mobile_money", f64::NAN).is_err());
    }

    #[test]
    fn test_auto_approval_disabled_by_default() {
        let catalog = PaymentCatalog::default();
        assert!(catalog.is_stablecoin("cryptocurrency"));
        assert!(!catalog.should_auto_approve(10.0, "cryptocurrency"));
    }

    #[test]
    fn test_auto_approval_threshold() {
        let catalog = PaymentCatalog::with_stablecoin(StablecoinConfig {
            enabled: true,
            ..StablecoinConfig::default()
        });

        assert!(catalog.should_auto_approve(1000.0, "cryptocurrency"));
        assert!(!catalog.should_auto_approve(1000.01, "cryptocurrency"));
        assert!(!catalog.should_auto_approve(10.0, "bank_transfer"));
    }

    #[test]
    fn test_stablecoin_tokens() {
        let catalog = PaymentCatalog::default();
        let stablecoin = catalog.stablecoin();

        let symbols: Vec<&str> = stablecoin.supported_tokens.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["USDC", "USDT", "DAI"]);
        assert_eq!(stablecoin.token("dai").unwrap().decimals, 18);
        assert!(stablecoin.token("BUSD").is_none());
        assert!(stablecoin.supports_network("polygon"));
        assert!(!stablecoin.supports_network("solana"));

        // Every accepted crypto currency has a token definition
        let crypto = catalog.get("cryptocurrency").unwrap();
        assert_eq!(crypto.name, crypto.id);
        assert!(crypto.supported_currencies.iter().all(|c| stablecoin.token(c).is_some()));
    }
}
