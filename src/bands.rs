//! Per-product band (data layer) vocabularies.
//!
//! Each product's grid exposes a closed set of named layers; the `band` query
//! parameter of the subset endpoint selects one of them, or `all`. Variants
//! carry the canonical upstream layer token and render to it via `Display` and
//! [`Band::token`].
//!
//! Aqua (`MYD*`) products that expose the same layer set as their Terra
//! (`MOD*`) counterpart are type aliases of the Terra enum, as are the
//! `MCD15A2H`/`MCD15A3H` LAI/FPAR pair. Products without a local table here
//! (VIIRS, Daymet, SMAP, ECOSTRESS, SIF, GEDI) stay reachable through the
//! blanket `&str` implementation of [`Band`].

use strum::{Display, IntoStaticStr};

/// A selectable data layer of a product.
///
/// The seam the client accepts wherever a band is needed; `token` is the
/// explicit accessor for the canonical upstream string.
pub trait Band {
    fn token(&self) -> &str;
}

/// Raw layer tokens remain usable for products without a typed table.
impl Band for &str {
    fn token(&self) -> &str {
        self
    }
}

macro_rules! impl_band {
    ($($ty:ty),+ $(,)?) => {
        $(impl Band for $ty {
            fn token(&self) -> &str {
                (*self).into()
            }
        })+
    };
}

/// MOD09A1 — MODIS/Terra Surface Reflectance (SREF) 8-Day L3 Global 500m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mod09A1Band {
    #[strum(serialize = "sur_refl_b01")]
    SurfaceReflectanceBand01,
    #[strum(serialize = "sur_refl_b02")]
    SurfaceReflectanceBand02,
    #[strum(serialize = "sur_refl_b03")]
    SurfaceReflectanceBand03,
    #[strum(serialize = "sur_refl_b04")]
    SurfaceReflectanceBand04,
    #[strum(serialize = "sur_refl_b05")]
    SurfaceReflectanceBand05,
    #[strum(serialize = "sur_refl_b06")]
    SurfaceReflectanceBand06,
    #[strum(serialize = "sur_refl_b07")]
    SurfaceReflectanceBand07,
    #[strum(serialize = "sur_refl_day_of_year")]
    SurfaceReflectanceDayOfYear,
    #[strum(serialize = "sur_refl_qc_500m")]
    SurfaceReflectanceQualityControl,
    #[strum(serialize = "sur_refl_raz")]
    SurfaceReflectanceRelativeAzimuth,
    #[strum(serialize = "sur_refl_state_500m")]
    SurfaceReflectanceStateFlags,
    #[strum(serialize = "sur_refl_szen")]
    SurfaceReflectanceSolarZenith,
    #[strum(serialize = "sur_refl_vzen")]
    SurfaceReflectanceViewZenith,
    #[strum(serialize = "all")]
    All,
}

/// MYD09A1 exposes the same surface reflectance layers as MOD09A1.
pub type Myd09A1Band = Mod09A1Band;

/// MOD11A2 — MODIS/Terra Land Surface Temperature and Emissivity (LST)
/// 8-Day L3 Global 1 km SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mod11A2Band {
    #[strum(serialize = "Clear_sky_days")]
    DaysClearSkyCoverage,
    #[strum(serialize = "Clear_sky_nights")]
    NightsClearSkyCoverage,
    #[strum(serialize = "Day_view_angl")]
    DayViewAngle,
    #[strum(serialize = "Day_view_time")]
    DayViewTime,
    #[strum(serialize = "Emis_31")]
    EmissivityBand31,
    #[strum(serialize = "Emis_32")]
    EmissivityBand32,
    #[strum(serialize = "LST_Day_1km")]
    DayLandSurfaceTemperature,
    #[strum(serialize = "LST_Night_1km")]
    NightLandSurfaceTemperature,
    #[strum(serialize = "Night_view_angl")]
    NightViewAngle,
    #[strum(serialize = "Night_view_time")]
    NightViewTime,
    #[strum(serialize = "QC_Day")]
    DayQualityIndicators,
    #[strum(serialize = "QC_Night")]
    NightQualityIndicators,
    #[strum(serialize = "all")]
    All,
}

/// MYD11A2 exposes the same LST layers as MOD11A2.
pub type Myd11A2Band = Mod11A2Band;

/// MOD13Q1 — MODIS/Terra Vegetation Indices (NDVI/EVI) 16-Day L3 Global 250m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mod13Q1Band {
    #[strum(serialize = "250m_16_days_blue_reflectance")]
    BlueReflectance,
    #[strum(serialize = "250m_16_days_composite_day_of_the_year")]
    CompositeDayOfTheYear,
    #[strum(serialize = "250m_16_days_EVI")]
    Evi,
    #[strum(serialize = "250m_16_days_MIR_reflectance")]
    MirReflectance,
    #[strum(serialize = "250m_16_days_NDVI")]
    Ndvi,
    #[strum(serialize = "250m_16_days_NIR_reflectance")]
    NirReflectance,
    #[strum(serialize = "250m_16_days_pixel_reliability")]
    PixelReliability,
    #[strum(serialize = "250m_16_days_red_reflectance")]
    RedReflectance,
    #[strum(serialize = "250m_16_days_relative_azimuth_angle")]
    RelativeAzimuthAngle,
    #[strum(serialize = "250m_16_days_sun_zenith_angle")]
    SunZenithAngle,
    #[strum(serialize = "250m_16_days_view_zenith_angle")]
    ViewZenithAngle,
    #[strum(serialize = "250m_16_days_VI_Quality")]
    ViQuality,
    #[strum(serialize = "all")]
    All,
}

/// MYD13Q1 exposes the same vegetation index layers as MOD13Q1.
pub type Myd13Q1Band = Mod13Q1Band;

/// MOD14A2 — MODIS/Terra Thermal Anomalies/Fire (Fire) 8-Day L3 Global 1 km SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mod14A2Band {
    #[strum(serialize = "FireMask")]
    FireMask,
    #[strum(serialize = "pixel quality")]
    PixelQuality,
    #[strum(serialize = "all")]
    All,
}

/// MYD14A2 — MODIS/Aqua Thermal Anomalies/Fire. Same layers as MOD14A2 but
/// the quality layer is published under a different token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Myd14A2Band {
    #[strum(serialize = "FireMask")]
    FireMask,
    #[strum(serialize = "QA")]
    PixelQuality,
    #[strum(serialize = "all")]
    All,
}

/// MOD15A2H — MODIS/Terra Leaf Area Index/FPAR (LAI/FPAR) 8-Day L4 Global 500 m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mod15A2HBand {
    #[strum(serialize = "FparExtra_QC")]
    ExtraDetailQuality,
    #[strum(serialize = "FparLai_QC")]
    Quality,
    #[strum(serialize = "FparStdDev_500m")]
    FparStandardDeviation,
    #[strum(serialize = "Fpar_500m")]
    Fpar,
    #[strum(serialize = "LaiStdDev_500m")]
    LaiStandardDeviation,
    #[strum(serialize = "Lai_500m")]
    Lai,
    #[strum(serialize = "all")]
    All,
}

/// MYD15A2H, MCD15A2H and MCD15A3H all expose the MOD15A2H LAI/FPAR layer set.
pub type Myd15A2HBand = Mod15A2HBand;
pub type Mcd15A2HBand = Mod15A2HBand;
pub type Mcd15A3HBand = Mod15A2HBand;

/// MOD16A2 — MODIS/Terra Net Evapotranspiration (ET) 8-Day L4 Global 500 m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mod16A2Band {
    #[strum(serialize = "ET_500m")]
    Evapotranspiration,
    #[strum(serialize = "ET_QC_500m")]
    EvapotranspirationQuality,
    #[strum(serialize = "LE_500m")]
    LatentHeatFlux,
    #[strum(serialize = "PET_500m")]
    PotentialEvapotranspiration,
    #[strum(serialize = "PLE_500m")]
    PotentialLatentHeatFlux,
    #[strum(serialize = "all")]
    All,
}

/// MYD16A2 exposes the same evapotranspiration layers as MOD16A2.
pub type Myd16A2Band = Mod16A2Band;

/// MOD17A2H — MODIS/Terra Gross Primary Productivity (GPP) 8-Day L4 Global 500 m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mod17A2HBand {
    #[strum(serialize = "Gpp_500m")]
    GrossPrimaryProduction,
    #[strum(serialize = "PsnNet_500m")]
    NetPhotosynthesis,
    #[strum(serialize = "Psn_QC_500m")]
    QualityControlBits,
    #[strum(serialize = "all")]
    All,
}

/// MYD17A2H exposes the same GPP layers as MOD17A2H.
pub type Myd17A2HBand = Mod17A2HBand;

/// MOD17A3HGF — MODIS/Terra Net Primary Production Gap-Filled (NPP)
/// Yearly L4 Global 500 m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mod17A3HgfBand {
    #[strum(serialize = "Npp_500m")]
    NetPrimaryProductivity,
    #[strum(serialize = "Npp_QC_500m")]
    QualityControlBits,
    #[strum(serialize = "all")]
    All,
}

/// MYD17A3HGF exposes the same NPP layers as MOD17A3HGF.
pub type Myd17A3HgfBand = Mod17A3HgfBand;

/// MOD21A2 — MODIS/Terra Land Surface Temperature/3-Band Emissivity (LSTE)
/// 8-Day L3 Global 1 km SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mod21A2Band {
    #[strum(serialize = "Emis_29")]
    EmissivityBand29,
    #[strum(serialize = "Emis_31")]
    EmissivityBand31,
    #[strum(serialize = "Emis_32")]
    EmissivityBand32,
    #[strum(serialize = "LST_Day_1KM")]
    DayLandSurfaceTemperature,
    #[strum(serialize = "LST_Night_1KM")]
    NightLandSurfaceTemperature,
    #[strum(serialize = "QC_Day")]
    DayQualityControl,
    #[strum(serialize = "QC_Night")]
    NightQualityControl,
    #[strum(serialize = "View_Angle_Day")]
    DayViewZenithAngle,
    #[strum(serialize = "View_Angle_Night")]
    NightViewZenithAngle,
    #[strum(serialize = "View_Time_Day")]
    DayViewTime,
    #[strum(serialize = "View_Time_Night")]
    NightViewTime,
    #[strum(serialize = "all")]
    All,
}

/// MYD21A2 exposes the same LSTE layers as MOD21A2.
pub type Myd21A2Band = Mod21A2Band;

/// MOD44B — MODIS/Terra Vegetation Continuous Fields (VCF) Yearly L3 Global 250 m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mod44BBand {
    #[strum(serialize = "Cloud")]
    CloudCover,
    #[strum(serialize = "Percent_NonTree_Vegetation")]
    PercentNonTreeVegetation,
    #[strum(serialize = "Percent_NonVegetated")]
    PercentNonVegetated,
    #[strum(serialize = "Percent_NonVegetated_SD")]
    PercentNonVegetatedStandardDeviation,
    #[strum(serialize = "Percent_Tree_Cover")]
    PercentTreeCover,
    #[strum(serialize = "Percent_Tree_Cover_SD")]
    PercentTreeCoverStandardDeviation,
    #[strum(serialize = "Quality")]
    QualityControl,
    #[strum(serialize = "all")]
    All,
}

/// MCD12Q1 — MODIS/Terra+Aqua Land Cover Type (LC) Yearly L3 Global 500 m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mcd12Q1Band {
    #[strum(serialize = "LC_Prop1")]
    LandCoverFaoCover,
    #[strum(serialize = "LC_Prop1_Assessment")]
    LandCoverFaoCoverConfidence,
    #[strum(serialize = "LC_Prop2")]
    LandCoverFaoUse,
    #[strum(serialize = "LC_Prop2_Assessment")]
    LandCoverFaoUseConfidence,
    #[strum(serialize = "LC_Prop3")]
    LandCoverFaoSurfaceHydrology,
    #[strum(serialize = "LC_Prop3_Assessment")]
    LandCoverFaoSurfaceHydrologyConfidence,
    #[strum(serialize = "LC_Type1")]
    LandCoverTypeIgbp,
    #[strum(serialize = "LC_Type2")]
    LandCoverTypeUmd,
    #[strum(serialize = "LC_Type3")]
    LandCoverTypeLai,
    #[strum(serialize = "LC_Type4")]
    LandCoverTypeBgc,
    #[strum(serialize = "LC_Type5")]
    LandCoverTypePft,
    #[strum(serialize = "LW")]
    LandWaterClassification,
    #[strum(serialize = "QC")]
    QualityControl,
    #[strum(serialize = "all")]
    All,
}

/// MCD12Q2 — MODIS/Terra+Aqua Land Cover Dynamics (LCD) Yearly L3 Global 500 m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mcd12Q2Band {
    #[strum(serialize = "Dormancy.Num_Modes_01")]
    OnsetDormancyModes01,
    #[strum(serialize = "Dormancy.Num_Modes_02")]
    OnsetDormancyModes02,
    #[strum(serialize = "EVI_Amplitude.Num_Modes_01")]
    EviAmplitudeModes01,
    #[strum(serialize = "EVI_Amplitude.Num_Modes_02")]
    EviAmplitudeModes02,
    #[strum(serialize = "EVI_Area.Num_Modes_01")]
    EviAreaModes01,
    #[strum(serialize = "EVI_Area.Num_Modes_02")]
    EviAreaModes02,
    #[strum(serialize = "EVI_Minimum.Num_Modes_01")]
    EviMinimumModes01,
    #[strum(serialize = "EVI_Minimum.Num_Modes_02")]
    EviMinimumModes02,
    #[strum(serialize = "Greenup.Num_Modes_01")]
    GreenupModes01,
    #[strum(serialize = "Greenup.Num_Modes_02")]
    GreenupModes02,
    #[strum(serialize = "Maturity.Num_Modes_01")]
    MaturityModes01,
    #[strum(serialize = "Maturity.Num_Modes_02")]
    MaturityModes02,
    #[strum(serialize = "MidGreendown.Num_Modes_01")]
    MidGreendownModes01,
    #[strum(serialize = "MidGreendown.Num_Modes_02")]
    MidGreendownModes02,
    #[strum(serialize = "MidGreenup.Num_Modes_01")]
    MidGreenupModes01,
    #[strum(serialize = "MidGreenup.Num_Modes_02")]
    MidGreenupModes02,
    #[strum(serialize = "NumCycles")]
    NumberOfCycles,
    #[strum(serialize = "QA_Detailed.Num_Modes_01")]
    QualityDetailedModes01,
    #[strum(serialize = "QA_Detailed.Num_Modes_02")]
    QualityDetailedModes02,
    #[strum(serialize = "QA_Overall.Num_Modes_01")]
    QualityOverallModes01,
    #[strum(serialize = "QA_Overall.Num_Modes_02")]
    QualityOverallModes02,
    #[strum(serialize = "all")]
    All,
}

/// MCD19A3 — MODIS/Terra+Aqua BRDF Model Parameters (MAIAC) 8-Day L3 Global 1 km SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mcd19A3Band {
    #[strum(serialize = "Kgeo")]
    RtlsGeometricKernel,
    #[strum(serialize = "Kiso")]
    RtlsIsotropicKernel,
    #[strum(serialize = "Kvol")]
    RtlsVolumetricKernel,
    #[strum(serialize = "Sur_albedo")]
    SurfaceAlbedo,
    #[strum(serialize = "UpdateDay")]
    UpdateDayInterval,
    #[strum(serialize = "all")]
    All,
}

/// MCD43A — MODIS/Terra+Aqua BRDF and Calculated Albedo 16-Day L3 Global 500m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mcd43ABand {
    #[strum(serialize = "nir_actual")]
    NirAlbedoActual,
    #[strum(serialize = "nir_black")]
    NirAlbedoBlack,
    #[strum(serialize = "nir_white")]
    NirAlbedoWhite,
    #[strum(serialize = "shortwave_actual")]
    ShortwaveAlbedoActual,
    #[strum(serialize = "shortwave_black")]
    ShortwaveAlbedoBlack,
    #[strum(serialize = "shortwave_white")]
    ShortwaveAlbedoWhite,
    #[strum(serialize = "vis_actual")]
    VisAlbedoActual,
    #[strum(serialize = "vis_black")]
    VisAlbedoBlack,
    #[strum(serialize = "vis_white")]
    VisAlbedoWhite,
    #[strum(serialize = "all")]
    All,
}

/// MCD43A1 — MODIS/Terra+Aqua BRDF/Albedo Model Parameters (BRDF)
/// 16-Day L3 Global 500m SIN Grid.
///
/// The mandatory-quality layers are published starting from band 2; the
/// `BDRF` spelling in their tokens is the service's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mcd43A1Band {
    #[strum(serialize = "BDRF_Albedo_Band_Mandatory_Quality_Band2")]
    MandatoryQualityBand02,
    #[strum(serialize = "BDRF_Albedo_Band_Mandatory_Quality_Band3")]
    MandatoryQualityBand03,
    #[strum(serialize = "BDRF_Albedo_Band_Mandatory_Quality_Band4")]
    MandatoryQualityBand04,
    #[strum(serialize = "BDRF_Albedo_Band_Mandatory_Quality_Band5")]
    MandatoryQualityBand05,
    #[strum(serialize = "BDRF_Albedo_Band_Mandatory_Quality_Band6")]
    MandatoryQualityBand06,
    #[strum(serialize = "BDRF_Albedo_Band_Mandatory_Quality_Band7")]
    MandatoryQualityBand07,
    #[strum(serialize = "BDRF_Albedo_Band_Mandatory_Quality_nir")]
    MandatoryQualityNir,
    #[strum(serialize = "BDRF_Albedo_Band_Mandatory_Quality_shortwave")]
    MandatoryQualityShortwave,
    #[strum(serialize = "BDRF_Albedo_Band_Mandatory_Quality_vis")]
    MandatoryQualityVis,
    #[strum(serialize = "BRDF_Albedo_Parameters_Band1")]
    ParametersBand01,
    #[strum(serialize = "BRDF_Albedo_Parameters_Band2")]
    ParametersBand02,
    #[strum(serialize = "BRDF_Albedo_Parameters_Band3")]
    ParametersBand03,
    #[strum(serialize = "BRDF_Albedo_Parameters_Band4")]
    ParametersBand04,
    #[strum(serialize = "BRDF_Albedo_Parameters_Band5")]
    ParametersBand05,
    #[strum(serialize = "BRDF_Albedo_Parameters_Band6")]
    ParametersBand06,
    #[strum(serialize = "BRDF_Albedo_Parameters_Band7")]
    ParametersBand07,
    #[strum(serialize = "BRDF_Albedo_Parameters_nir")]
    ParametersNir,
    #[strum(serialize = "BRDF_Albedo_Parameters_shortwave")]
    ParametersShortwave,
    #[strum(serialize = "BRDF_Albedo_Parameters_vis")]
    ParametersVis,
    #[strum(serialize = "all")]
    All,
}

/// MCD43A4 — MODIS/Terra+Aqua Nadir BRDF-Adjusted Reflectance (NBAR)
/// Daily L3 Global 500 m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mcd43A4Band {
    #[strum(serialize = "BRDF_Albedo_Band_Mandatory_Quality_Band1")]
    MandatoryQualityBand01,
    #[strum(serialize = "BRDF_Albedo_Band_Mandatory_Quality_Band2")]
    MandatoryQualityBand02,
    #[strum(serialize = "BRDF_Albedo_Band_Mandatory_Quality_Band3")]
    MandatoryQualityBand03,
    #[strum(serialize = "BRDF_Albedo_Band_Mandatory_Quality_Band4")]
    MandatoryQualityBand04,
    #[strum(serialize = "BRDF_Albedo_Band_Mandatory_Quality_Band5")]
    MandatoryQualityBand05,
    #[strum(serialize = "BRDF_Albedo_Band_Mandatory_Quality_Band6")]
    MandatoryQualityBand06,
    #[strum(serialize = "BRDF_Albedo_Band_Mandatory_Quality_Band7")]
    MandatoryQualityBand07,
    #[strum(serialize = "Nadir_Reflectance_Band1")]
    NadirReflectanceBand01,
    #[strum(serialize = "Nadir_Reflectance_Band2")]
    NadirReflectanceBand02,
    #[strum(serialize = "Nadir_Reflectance_Band3")]
    NadirReflectanceBand03,
    #[strum(serialize = "Nadir_Reflectance_Band4")]
    NadirReflectanceBand04,
    #[strum(serialize = "Nadir_Reflectance_Band5")]
    NadirReflectanceBand05,
    #[strum(serialize = "Nadir_Reflectance_Band6")]
    NadirReflectanceBand06,
    #[strum(serialize = "Nadir_Reflectance_Band7")]
    NadirReflectanceBand07,
    #[strum(serialize = "all")]
    All,
}

/// MCD64A1 — MODIS/Terra+Aqua Burned Area Monthly L3 Global 500 m SIN Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Mcd64A1Band {
    #[strum(serialize = "Burn_Date")]
    BurnDate,
    #[strum(serialize = "Burn_Date_Uncertainty")]
    BurnDateUncertainty,
    #[strum(serialize = "First_Day")]
    FirstDayReliableChangeDetection,
    #[strum(serialize = "Last_Day")]
    LastDayReliableChangeDetection,
    #[strum(serialize = "QA")]
    QualityAssurance,
    #[strum(serialize = "all")]
    All,
}

impl_band!(
    Mod09A1Band,
    Mod11A2Band,
    Mod13Q1Band,
    Mod14A2Band,
    Myd14A2Band,
    Mod15A2HBand,
    Mod16A2Band,
    Mod17A2HBand,
    Mod17A3HgfBand,
    Mod21A2Band,
    Mod44BBand,
    Mcd12Q1Band,
    Mcd12Q2Band,
    Mcd19A3Band,
    Mcd43ABand,
    Mcd43A1Band,
    Mcd43A4Band,
    Mcd64A1Band,
);
