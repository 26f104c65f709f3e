//! Catalog token vocabularies for the Subsets web service.
//!
//! Every variant renders to exactly one canonical upstream token via
//! `Display` / `as_str`; tokens are only ever used as URL-formatting inputs.

use strum::{Display, EnumString, IntoStaticStr};

/// Sensor filter for the products listing.
///
/// [`Sensor::All`] renders as the empty token, which the service treats as
/// "no sensor filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Sensor {
    #[strum(serialize = "MODIS-Terra")]
    ModisTerra,
    #[strum(serialize = "MODIS-Aqua")]
    ModisAqua,
    #[strum(serialize = "MODIS-TerraAqua")]
    ModisTerraAqua,
    #[strum(serialize = "VIIRS-SNPP")]
    ViirsSnpp,
    #[strum(serialize = "Daymet")]
    Daymet,
    #[strum(serialize = "SMAP")]
    Smap,
    #[strum(serialize = "ECOSTRESS")]
    Ecostress,
    #[strum(serialize = "SIFESDR")]
    Sifesdr,
    #[strum(serialize = "")]
    All,
}

/// Tool filter for the products listing. [`Tool::All`] renders empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Tool {
    #[strum(serialize = "FixedSite")]
    FixedSite,
    #[strum(serialize = "GlobalSubset")]
    GlobalSubset,
    #[strum(serialize = "")]
    All,
}

/// The fixed product vocabulary of the Subsets service.
///
/// Short codes of the remote sensing datasets reachable through the subset
/// endpoints. The `FromStr` impl accepts the upstream code
/// case-insensitively, which is how product records coming back from the
/// `/products` endpoint are matched against this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Product {
    // MODIS-Terra
    #[strum(serialize = "MOD09A1")]
    Mod09A1,
    #[strum(serialize = "MOD11A2")]
    Mod11A2,
    #[strum(serialize = "MOD13Q1")]
    Mod13Q1,
    #[strum(serialize = "MOD14A2")]
    Mod14A2,
    #[strum(serialize = "MOD15A2H")]
    Mod15A2H,
    #[strum(serialize = "MOD16A2")]
    Mod16A2,
    #[strum(serialize = "MOD17A2H")]
    Mod17A2H,
    #[strum(serialize = "MOD17A3HGF")]
    Mod17A3Hgf,
    #[strum(serialize = "MOD21A2")]
    Mod21A2,
    #[strum(serialize = "MOD44B")]
    Mod44B,
    // MODIS-Aqua
    #[strum(serialize = "MYD09A1")]
    Myd09A1,
    #[strum(serialize = "MYD11A2")]
    Myd11A2,
    #[strum(serialize = "MYD13Q1")]
    Myd13Q1,
    #[strum(serialize = "MYD14A2")]
    Myd14A2,
    #[strum(serialize = "MYD15A2H")]
    Myd15A2H,
    #[strum(serialize = "MYD16A2")]
    Myd16A2,
    #[strum(serialize = "MYD17A2H")]
    Myd17A2H,
    #[strum(serialize = "MYD17A3HGF")]
    Myd17A3Hgf,
    #[strum(serialize = "MYD21A2")]
    Myd21A2,
    // MODIS-Terra and Aqua
    #[strum(serialize = "MCD12Q1")]
    Mcd12Q1,
    #[strum(serialize = "MCD12Q2")]
    Mcd12Q2,
    #[strum(serialize = "MCD15A2H")]
    Mcd15A2H,
    #[strum(serialize = "MCD15A3H")]
    Mcd15A3H,
    #[strum(serialize = "MCD19A3")]
    Mcd19A3,
    #[strum(serialize = "MCD43A")]
    Mcd43A,
    #[strum(serialize = "MCD43A1")]
    Mcd43A1,
    #[strum(serialize = "MCD43A4")]
    Mcd43A4,
    #[strum(serialize = "MCD64A1")]
    Mcd64A1,
    // VIIRS-SNPP
    #[strum(serialize = "VNP09A1")]
    Vnp09A1,
    #[strum(serialize = "VNP09H1")]
    Vnp09H1,
    #[strum(serialize = "VNP13A1")]
    Vnp13A1,
    #[strum(serialize = "VNP15A2H")]
    Vnp15A2H,
    #[strum(serialize = "VNP21A2")]
    Vnp21A2,
    #[strum(serialize = "VNP22Q2")]
    Vnp22Q2,
    // Daymet
    #[strum(serialize = "Daymet")]
    Daymet,
    // SMAP
    #[strum(serialize = "SPL3SMP_E")]
    Spl3SmpE,
    #[strum(serialize = "SPL4CMDL")]
    Spl4Cmdl,
    // ECOSTRESS
    #[strum(serialize = "ECO4ESIPTJPL")]
    Eco4EsiPtJpl,
    #[strum(serialize = "ECO4WUE")]
    Eco4Wue,
    // SIFESDR
    #[strum(serialize = "SIF005")]
    Sif005,
    #[strum(serialize = "SIF_ANN")]
    SifAnn,
    // GEDI
    #[strum(serialize = "GEDI03")]
    Gedi03,
    #[strum(serialize = "GEDI04_B")]
    Gedi04B,
}

impl Sensor {
    /// Canonical upstream token.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl Tool {
    /// Canonical upstream token.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl Product {
    /// Canonical upstream short code.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
