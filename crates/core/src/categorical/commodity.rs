use super::categorical;

categorical! {
    /// Commodity futures quoted by the provider.
    ///
    /// The raw value is the `name` parameter of the commodity endpoint. `Gold`
    /// is quoted through the dedicated gold endpoint instead.
    pub enum CommodityType {
        Gold => ("gold", "gold"),
        SoybeanOil => ("soybean_oil", "soybean_oil"),
        Wheat => ("wheat", "wheat"),
        Platinum => ("platinum", "platinum"),
        MicroSilver => ("micro_silver", "micro_silver"),
        LeanHogs => ("lean_hogs", "lean_hogs"),
        Corn => ("corn", "corn"),
        Oat => ("oat", "oat"),
        Aluminum => ("aluminum", "aluminum"),
        SoybeanMeal => ("soybean_meal", "soybean_meal"),
        Silver => ("silver", "silver"),
        Soybean => ("soybean", "soybean"),
        Lumber => ("lumber", "lumber"),
        LiveCattle => ("live_cattle", "live_cattle"),
        Sugar => ("sugar", "sugar"),
        NaturalGas => ("natural_gas", "natural_gas"),
        CrudeOil => ("crude_oil", "crude_oil"),
        OrangeJuice => ("orange_juice", "orange_juice"),
        Coffee => ("coffee", "coffee"),
        Cotton => ("cotton", "cotton"),
        Copper => ("copper", "copper"),
        MicroGold => ("micro_gold", "micro_gold"),
        FeederCattle => ("feeder_cattle", "feeder_cattle"),
        RoughRice => ("rough_rice", "rough_rice"),
        Palladium => ("palladium", "palladium"),
        Cocoa => ("cocoa", "cocoa"),
        BrentCrudeOil => ("brent_crude_oil", "brent_crude_oil"),
        GasolineRbob => ("gasoline_rbob", "gasoline_rbob"),
        HeatingOil => ("heating_oil", "heating_oil"),
        Class3Milk => ("class_3_milk", "class_3_milk"),
    }
    aliases {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_members() {
        assert_eq!(CommodityType::known().len(), 30);
        assert_eq!(CommodityType::KNOWN_RAW.len(), 30);

        let unique: HashSet<_> = CommodityType::known().into_iter().collect();
        assert_eq!(unique.len(), 30);
    }

    #[test]
    fn test_decode_gold() {
        let gold = CommodityType::decode("gold");
        assert_eq!(gold, CommodityType::Gold);
        assert_eq!(gold.identifier(), "gold");
        assert!(gold.is_known());
    }

    #[test]
    fn test_decode_unknown() {
        let value = CommodityType::decode("unobtainium");
        assert!(!value.is_known());
        assert_eq!(value.identifier(), "unknown_unobtainium");
        assert_eq!(value.raw(), "unobtainium");
        assert_eq!(value, CommodityType::decode("unobtainium"));
        assert_ne!(value, CommodityType::decode("kryptonite"));
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        assert!(!CommodityType::decode("Gold").is_known());
    }

    #[test]
    fn test_from_identifier() {
        assert_eq!(
            CommodityType::from_identifier("class_3_milk"),
            Some(CommodityType::Class3Milk)
        );
        assert_eq!(CommodityType::from_identifier("unknown_gold"), None);
    }

    #[test]
    fn test_parse_and_display() {
        let value: CommodityType = "brent_crude_oil".parse().unwrap();
        assert_eq!(value, CommodityType::BrentCrudeOil);
        assert_eq!(value.to_string(), "brent_crude_oil");
    }

    #[test]
    fn test_serde_uses_raw_value() {
        let json = serde_json::to_string(&CommodityType::NaturalGas).unwrap();
        assert_eq!(json, "\"natural_gas\"");

        let value: CommodityType = serde_json::from_str("\"moon_cheese\"").unwrap();
        assert_eq!(value.identifier(), "unknown_moon_cheese");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"moon_cheese\"");
    }
}
