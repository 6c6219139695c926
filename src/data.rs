//! The emissions dataset and its column model.

/// A single emissions record.
///
/// Records are immutable: the dataset is baked into the binary and never
/// mutated or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Country the company reports from.
    pub country: &'static str,
    /// Company name.
    pub company: &'static str,
    /// Economic sector.
    pub sector: &'static str,
    /// Reported emissions in megatonnes, non-negative.
    pub emissions: f64,
    /// Reporting year.
    pub year: i32,
}

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    /// Country column.
    Country,
    /// Company column.
    Company,
    /// Sector column.
    Sector,
    /// Emissions column (numeric).
    Emissions,
    /// Year column (numeric).
    Year,
}

impl ColumnKey {
    /// All columns in display order.
    pub const ALL: [ColumnKey; 5] = [
        ColumnKey::Country,
        ColumnKey::Company,
        ColumnKey::Sector,
        ColumnKey::Emissions,
        ColumnKey::Year,
    ];

    /// Stable field name for this column.
    pub fn name(self) -> &'static str {
        match self {
            ColumnKey::Country => "country",
            ColumnKey::Company => "company",
            ColumnKey::Sector => "sector",
            ColumnKey::Emissions => "emissions",
            ColumnKey::Year => "year",
        }
    }

    /// Header title shown in the table.
    pub fn title(self) -> &'static str {
        match self {
            ColumnKey::Country => "Land",
            ColumnKey::Company => "Unternehmen",
            ColumnKey::Sector => "Sektor",
            ColumnKey::Emissions => "Emissionen (Mt)",
            ColumnKey::Year => "Jahr",
        }
    }

    /// Look up a column by its stable field name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Whether this column holds numeric values.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKey::Emissions | ColumnKey::Year)
    }
}

impl Record {
    /// Numeric value of a column, if the column is numeric.
    pub fn number(&self, key: ColumnKey) -> Option<f64> {
        match key {
            ColumnKey::Emissions => Some(self.emissions),
            ColumnKey::Year => Some(f64::from(self.year)),
            _ => None,
        }
    }

    /// Cell text for a column, formatted for display.
    pub fn cell(&self, key: ColumnKey) -> String {
        match key {
            ColumnKey::Country => self.country.to_string(),
            ColumnKey::Company => self.company.to_string(),
            ColumnKey::Sector => self.sector.to_string(),
            ColumnKey::Emissions => format!("{:.1}", self.emissions),
            ColumnKey::Year => self.year.to_string(),
        }
    }
}

const fn rec(
    country: &'static str,
    company: &'static str,
    sector: &'static str,
    emissions: f64,
    year: i32,
) -> Record {
    Record {
        country,
        company,
        sector,
        emissions,
        year,
    }
}

/// The fixed in-memory dataset, loaded once at startup.
pub static DATASET: &[Record] = &[
    rec("Deutschland", "EcoCorp", "Energie", 212.4, 2023),
    rec("USA", "TransLog", "Transport", 310.7, 2024),
    rec("Frankreich", "GreenSteel", "Industrie", 180.1, 2023),
    rec("China", "MegaPower", "Energie", 1200.5, 2024),
    rec("Brasilien", "AgroPlus", "Landwirtschaft", 340.2, 2022),
    rec("Indien", "UrbanBuild", "Bau", 450.6, 2023),
    rec("Kanada", "MapleOil", "Energie", 390.0, 2023),
    rec("Japan", "TechMotors", "Transport", 280.4, 2022),
    rec("Australien", "MineWorks", "Industrie", 600.7, 2023),
    rec("Südafrika", "SolarFuture", "Energie", 150.3, 2024),
    rec("Norwegen", "HydroPower", "Energie", 90.1, 2022),
    rec("Mexiko", "Cemex", "Bau", 320.5, 2023),
    rec("Russland", "GazpromX", "Energie", 980.0, 2023),
    rec("Italien", "FoodGroup", "Landwirtschaft", 210.2, 2024),
    rec("Spanien", "WindNow", "Energie", 170.8, 2022),
    rec("Südkorea", "ElectroCar", "Transport", 190.9, 2023),
    rec("UK", "BritSteel", "Industrie", 410.0, 2022),
    rec("Schweiz", "AlpAgro", "Landwirtschaft", 75.4, 2024),
    rec("Türkei", "BuildFast", "Bau", 280.6, 2023),
    rec("Ägypten", "NileEnergy", "Energie", 330.0, 2023),
    rec("Vereinigtes Königreich", "United Energy", "Energie", 250.0, 2023),
    rec("Vereinigte Staaten", "New Horizon Logistics", "Transport", 345.2, 2024),
];
