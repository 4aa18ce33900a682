use super::*;

#[test]
fn test_discriminants() {
    assert_eq!(GaugeType::LiquidityMiningCommittee.as_u8(), 0);
    assert_eq!(GaugeType::Polygon.as_u8(), 3);
    assert_eq!(GaugeType::ZkSync.as_u8(), 7);
}

#[test]
fn test_try_from_u8() {
    assert_eq!(GaugeType::try_from(5).unwrap(), GaugeType::Optimism);
    assert!(GaugeType::try_from(8).is_err());
    assert!(GaugeType::try_from(255).is_err());
}

#[test]
fn test_from_str() {
    assert_eq!("polygon".parse::<GaugeType>().unwrap(), GaugeType::Polygon);
    assert_eq!("ZK_SYNC".parse::<GaugeType>().unwrap(), GaugeType::ZkSync);
    assert_eq!("4".parse::<GaugeType>().unwrap(), GaugeType::Arbitrum);
    assert!("mainnet".parse::<GaugeType>().is_err());
}

#[test]
fn test_display_matches_serde() {
    for gauge_type in GaugeType::ALL {
        let json = serde_json::to_string(&gauge_type).unwrap();
        assert_eq!(json, format!("\"{}\"", gauge_type));
    }
}

#[test]
fn test_default_supported_types() {
    let supported = SupportedTypes::default();
    assert_eq!(supported.threshold(), GaugeType::Polygon);

    let admitted: Vec<_> = supported.iter().collect();
    assert_eq!(
        admitted,
        vec![
            GaugeType::Polygon,
            GaugeType::Arbitrum,
            GaugeType::Optimism,
            GaugeType::Gnosis,
            GaugeType::ZkSync,
        ]
    );

    let rejected: Vec<_> = supported.unsupported().collect();
    assert_eq!(
        rejected,
        vec![
            GaugeType::LiquidityMiningCommittee,
            GaugeType::VeBal,
            GaugeType::Ethereum,
        ]
    );
}

#[test]
fn test_custom_threshold() {
    let supported = SupportedTypes::from_threshold(GaugeType::Gnosis);
    assert!(!supported.contains(GaugeType::Optimism));
    assert!(supported.contains(GaugeType::Gnosis));
    assert!(supported.contains(GaugeType::ZkSync));
}
