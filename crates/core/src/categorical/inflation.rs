use super::categorical;

categorical! {
    /// Kind of inflation indicator.
    pub enum InflationIndicatorType {
        Cpi => ("cpi", "CPI"),
        Hicp => ("hicp", "HICP"),
    }
    aliases {}
}

categorical! {
    /// Countries covered by the inflation endpoint.
    ///
    /// `CZECHIA`, `UK` and `USA` are aliases; they decode from either their
    /// identifier or their short spelling and equal the member they point to.
    pub enum InflationCountry {
        Austria => ("austria", "Austria"),
        Belgium => ("belgium", "Belgium"),
        Brazil => ("brazil", "Brazil"),
        Canada => ("canada", "Canada"),
        Chile => ("chile", "Chile"),
        China => ("china", "China"),
        CzechRepublic => ("czech_republic", "Czech Republic"),
        Denmark => ("denmark", "Denmark"),
        Estonia => ("estonia", "Estonia"),
        Finland => ("finland", "Finland"),
        France => ("france", "France"),
        Germany => ("germany", "Germany"),
        Greece => ("greece", "Greece"),
        Hungary => ("hungary", "Hungary"),
        Iceland => ("iceland", "Iceland"),
        India => ("india", "India"),
        Indonesia => ("indonesia", "Indonesia"),
        Ireland => ("ireland", "Ireland"),
        Israel => ("israel", "Israel"),
        Italy => ("italy", "Italy"),
        Japan => ("japan", "Japan"),
        Mexico => ("mexico", "Mexico"),
        Norway => ("norway", "Norway"),
        Poland => ("poland", "Poland"),
        Portugal => ("portugal", "Portugal"),
        Russia => ("russia", "Russia"),
        Slovakia => ("slovakia", "Slovakia"),
        Slovenia => ("slovenia", "Slovenia"),
        SouthKorea => ("south_korea", "South Korea"),
        SouthAfrica => ("south_africa", "South Africa"),
        Spain => ("spain", "Spain"),
        Sweden => ("sweden", "Sweden"),
        Switzerland => ("switzerland", "Switzerland"),
        Netherlands => ("netherlands", "The Netherlands"),
        Turkiye => ("turkiye", "Türkiye"),
        UnitedKingdom => ("united_kingdom", "United Kingdom"),
        UnitedStates => ("united_states", "United States"),
    }
    aliases {
        CZECHIA => CzechRepublic ("czechia", "Czechia"),
        UK => UnitedKingdom ("uk", "UK"),
        USA => UnitedStates ("usa", "USA"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_indicator_types() {
        assert_eq!(InflationIndicatorType::decode("CPI"), InflationIndicatorType::Cpi);
        assert_eq!(InflationIndicatorType::decode("HICP").identifier(), "hicp");
        assert_eq!(InflationIndicatorType::Cpi.to_string(), "CPI");

        let ppi = InflationIndicatorType::decode("PPI");
        assert_eq!(ppi.identifier(), "unknown_PPI");
        assert_eq!(ppi.raw(), "PPI");
    }

    #[test]
    fn test_country_count() {
        assert_eq!(InflationCountry::known().len(), 37);
    }

    #[test]
    fn test_aliases_collapse() {
        assert_eq!(
            InflationCountry::decode("Czechia"),
            InflationCountry::decode("Czech Republic")
        );
        assert_eq!(InflationCountry::decode("UK"), InflationCountry::UnitedKingdom);
        assert_eq!(InflationCountry::USA, InflationCountry::UnitedStates);
        assert_eq!(
            InflationCountry::from_identifier("czechia"),
            Some(InflationCountry::CzechRepublic)
        );
        assert_eq!(
            InflationCountry::from_identifier("usa"),
            InflationCountry::from_identifier("united_states")
        );

        // resolved value carries the canonical spelling
        assert_eq!(InflationCountry::decode("USA").raw(), "United States");
        assert_eq!(InflationCountry::decode("UK").identifier(), "united_kingdom");
    }

    #[test]
    fn test_aliases_hash_identically() {
        let set: HashSet<_> = ["Czechia", "Czech Republic", "UK", "United Kingdom"]
            .into_iter()
            .map(InflationCountry::decode)
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_non_ascii_spelling() {
        let turkiye = InflationCountry::decode("Türkiye");
        assert_eq!(turkiye, InflationCountry::Turkiye);
        assert!(!InflationCountry::decode("Turkey").is_known());
    }

    #[test]
    fn test_deserialize_unknown_country() {
        let value: InflationCountry = serde_json::from_str("\"Atlantis\"").unwrap();
        assert_eq!(value.identifier(), "unknown_Atlantis");
        assert_eq!(value.to_string(), "Atlantis");
    }
}
