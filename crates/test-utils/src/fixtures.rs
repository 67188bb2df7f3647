//! Common projection definitions for obtran tests.
//!
//! Definitions are kept in the `+key=value` form the parameter loader reads,
//! with angles in degrees.

/// `+proj=...` definitions used across the test suite.
pub mod definitions {
    /// Mollweide with the north pole moved to 45N 90W
    pub const MOLL_POLE_45: &str = "+proj=ob_tran +o_proj=moll +o_lat_p=45 +o_lon_p=-90";

    /// The documented example forms, all around a Mollweide inner projection
    pub const DOCUMENTED: [&str; 4] = [
        MOLL_POLE_45,
        "+proj=ob_tran +o_proj=moll +o_lat_p=45 +o_lon_p=-90 +lon_0=60",
        "+proj=ob_tran +o_proj=moll +o_alpha=30 +o_lon_c=0 +o_lat_c=0",
        "+proj=ob_tran +o_proj=moll +lon_1=0 +lat_1=45 +lon_2=90 +lat_2=30",
    ];

    /// Rotated-pole lat/lon grid of the kind used by regional climate models
    pub const ROTATED_POLE_LONGLAT: &str =
        "+proj=ob_tran +o_proj=longlat +o_lon_p=-162 +o_lat_p=39.25 +lon_0=180";

    /// Pole placed on the equator
    pub const TRANSVERSE_EQC: &str = "+proj=ob_tran +o_proj=eqc +o_lat_p=0 +o_lon_p=0 +R=1";

    /// Plain inner projections without rotation
    pub const PLAIN: [&str; 4] = ["+proj=longlat", "+proj=eqc", "+proj=merc", "+proj=moll"];
}

/// Input text in the line format the `obtran` CLI reads.
pub mod input {
    /// Three forward points with a comment and a blank line
    pub const FORWARD_DEGREES: &str = "# lon lat\n0 0\n\n30 -20\n-120.5 60\n";

    /// One valid line and one that is not a coordinate pair
    pub const WITH_GARBAGE: &str = "10 10\nnot a point\n";
}
