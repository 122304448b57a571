/// The fixed set of surface-level GFS variables this converter extracts.
///
/// Each entry carries the GRIB2 identity used to recognize the field in a
/// decoded message (discipline, parameter category, parameter number, fixed
/// surface) and the NOMADS filter query names used to request it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceVariable {
    Temperature2m,
    Dewpoint2m,
    RelativeHumidity2m,
    WindU10m,
    WindV10m,
    WindGust,
    SurfacePressure,
    CloudCover,
    PrecipRate,
    Visibility,
}

/// Fixed surface type 103: specified height above ground (metres)
const SURFACE_HEIGHT_ABOVE_GROUND: u8 = 103;
/// Fixed surface type 1: ground or water surface
const SURFACE_GROUND: u8 = 1;
/// Fixed surface type 10: entire atmosphere
const SURFACE_ENTIRE_ATMOSPHERE: u8 = 10;

impl SurfaceVariable {
    pub const ALL: [SurfaceVariable; 10] = [
        SurfaceVariable::Temperature2m,
        SurfaceVariable::Dewpoint2m,
        SurfaceVariable::RelativeHumidity2m,
        SurfaceVariable::WindU10m,
        SurfaceVariable::WindV10m,
        SurfaceVariable::WindGust,
        SurfaceVariable::SurfacePressure,
        SurfaceVariable::CloudCover,
        SurfaceVariable::PrecipRate,
        SurfaceVariable::Visibility,
    ];

    /// GRIB short name, as produced by the decode stage
    pub fn short_name(&self) -> &'static str {
        match self {
            SurfaceVariable::Temperature2m => "t2m",
            SurfaceVariable::Dewpoint2m => "d2m",
            SurfaceVariable::RelativeHumidity2m => "r2",
            SurfaceVariable::WindU10m => "u10",
            SurfaceVariable::WindV10m => "v10",
            SurfaceVariable::WindGust => "gust",
            SurfaceVariable::SurfacePressure => "sp",
            SurfaceVariable::CloudCover => "tcc",
            SurfaceVariable::PrecipRate => "prate",
            SurfaceVariable::Visibility => "vis",
        }
    }

    /// Variable name in the NOMADS filter query (`var_{name}=on`)
    pub fn nomads_var(&self) -> &'static str {
        match self {
            SurfaceVariable::Temperature2m => "TMP",
            SurfaceVariable::Dewpoint2m => "DPT",
            SurfaceVariable::RelativeHumidity2m => "RH",
            SurfaceVariable::WindU10m => "UGRD",
            SurfaceVariable::WindV10m => "VGRD",
            SurfaceVariable::WindGust => "GUST",
            SurfaceVariable::SurfacePressure => "PRES",
            SurfaceVariable::CloudCover => "TCDC",
            SurfaceVariable::PrecipRate => "PRATE",
            SurfaceVariable::Visibility => "VIS",
        }
    }

    /// Level name in the NOMADS filter query (`lev_{name}=on`)
    pub fn nomads_level(&self) -> &'static str {
        match self {
            SurfaceVariable::Temperature2m
            | SurfaceVariable::Dewpoint2m
            | SurfaceVariable::RelativeHumidity2m => "2_m_above_ground",
            SurfaceVariable::WindU10m | SurfaceVariable::WindV10m => "10_m_above_ground",
            SurfaceVariable::WindGust
            | SurfaceVariable::SurfacePressure
            | SurfaceVariable::PrecipRate
            | SurfaceVariable::Visibility => "surface",
            SurfaceVariable::CloudCover => "entire_atmosphere",
        }
    }

    /// Match a decoded GRIB2 submessage identity against the known variables
    pub fn from_grib(
        discipline: u8,
        category: u8,
        number: u8,
        surface_type: u8,
        surface_value: f64,
    ) -> Option<SurfaceVariable> {
        if discipline != 0 {
            return None;
        }

        match (category, number, surface_type) {
            (0, 0, SURFACE_HEIGHT_ABOVE_GROUND) if surface_value == 2.0 => {
                Some(SurfaceVariable::Temperature2m)
            }
            (0, 6, SURFACE_HEIGHT_ABOVE_GROUND) if surface_value == 2.0 => {
                Some(SurfaceVariable::Dewpoint2m)
            }
            (1, 1, SURFACE_HEIGHT_ABOVE_GROUND) if surface_value == 2.0 => {
                Some(SurfaceVariable::RelativeHumidity2m)
            }
            (2, 2, SURFACE_HEIGHT_ABOVE_GROUND) if surface_value == 10.0 => {
                Some(SurfaceVariable::WindU10m)
            }
            (2, 3, SURFACE_HEIGHT_ABOVE_GROUND) if surface_value == 10.0 => {
                Some(SurfaceVariable::WindV10m)
            }
            (2, 22, SURFACE_GROUND) => Some(SurfaceVariable::WindGust),
            (3, 0, SURFACE_GROUND) => Some(SurfaceVariable::SurfacePressure),
            (6, 1, SURFACE_ENTIRE_ATMOSPHERE) => Some(SurfaceVariable::CloudCover),
            (1, 7, SURFACE_GROUND) => Some(SurfaceVariable::PrecipRate),
            (19, 0, SURFACE_GROUND) => Some(SurfaceVariable::Visibility),
            _ => None,
        }
    }
}

/// Fixed rename table from GRIB short names to output column names
pub const COLUMN_RENAMES: [(&str, &str); 10] = [
    ("t2m", "temperature_k"),
    ("d2m", "dewpoint_k"),
    ("r2", "relative_humidity"),
    ("u10", "wind_u_ms"),
    ("v10", "wind_v_ms"),
    ("gust", "wind_gust_ms"),
    ("sp", "surface_pressure_pa"),
    ("tcc", "cloud_cover"),
    ("prate", "precip_rate_kg_m2_s"),
    ("vis", "visibility_m"),
];

/// Map a GRIB short name to its output column name.
///
/// Names not present in the rename table pass through unchanged.
pub fn rename_column(short_name: &str) -> &str {
    COLUMN_RENAMES
        .iter()
        .find(|(from, _)| *from == short_name)
        .map(|(_, to)| *to)
        .unwrap_or(short_name)
}
