//! Static animation catalog.
//!
//! Maps a stable positive id to a display name and a runnable routine.
//! The catalog is built at compile time and never mutated; ids are the
//! key, names are presentation only and not required to be unique.

const ANIMATION_NAME_ALTERNATING: &str = "Cop Lights Alternating";
const ANIMATION_NAME_LINE_OUT: &str = "Cop Lights Line Out";
const ANIMATION_NAME_MIX: &str = "Cop Lights Mix";
const ANIMATION_NAME_RAINY_DAY: &str = "Rainy Day";
const ANIMATION_NAME_CHRISTMAS: &str = "Christmas Dance";
const ANIMATION_NAME_MELLO_YELLO: &str = "Mello Yello";
const ANIMATION_NAME_YULE_LOG: &str = "Yule Log";
const ANIMATION_NAME_HALLOWEEN: &str = "Halloween Orange";

const ANIMATION_ID_ALTERNATING: u8 = 1;
const ANIMATION_ID_LINE_OUT: u8 = 2;
const ANIMATION_ID_MIX: u8 = 3;
const ANIMATION_ID_RAINY_DAY: u8 = 4;
const ANIMATION_ID_CHRISTMAS: u8 = 5;
const ANIMATION_ID_MELLO_YELLO: u8 = 6;
const ANIMATION_ID_YULE_LOG: u8 = 7;
const ANIMATION_ID_HALLOWEEN: u8 = 8;

/// One catalog entry, the `(id, name)` pair shown to control surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub id: u8,
    pub name: &'static str,
}

/// Known animation ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    CopLightsAlternating = ANIMATION_ID_ALTERNATING,
    CopLightsLineOut = ANIMATION_ID_LINE_OUT,
    CopLightsMix = ANIMATION_ID_MIX,
    RainyDay = ANIMATION_ID_RAINY_DAY,
    ChristmasDance = ANIMATION_ID_CHRISTMAS,
    MelloYello = ANIMATION_ID_MELLO_YELLO,
    YuleLog = ANIMATION_ID_YULE_LOG,
    HalloweenOrange = ANIMATION_ID_HALLOWEEN,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_ALTERNATING => Self::CopLightsAlternating,
            ANIMATION_ID_LINE_OUT => Self::CopLightsLineOut,
            ANIMATION_ID_MIX => Self::CopLightsMix,
            ANIMATION_ID_RAINY_DAY => Self::RainyDay,
            ANIMATION_ID_CHRISTMAS => Self::ChristmasDance,
            ANIMATION_ID_MELLO_YELLO => Self::MelloYello,
            ANIMATION_ID_YULE_LOG => Self::YuleLog,
            ANIMATION_ID_HALLOWEEN => Self::HalloweenOrange,
            _ => return None,
        })
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CopLightsAlternating => ANIMATION_NAME_ALTERNATING,
            Self::CopLightsLineOut => ANIMATION_NAME_LINE_OUT,
            Self::CopLightsMix => ANIMATION_NAME_MIX,
            Self::RainyDay => ANIMATION_NAME_RAINY_DAY,
            Self::ChristmasDance => ANIMATION_NAME_CHRISTMAS,
            Self::MelloYello => ANIMATION_NAME_MELLO_YELLO,
            Self::YuleLog => ANIMATION_NAME_YULE_LOG,
            Self::HalloweenOrange => ANIMATION_NAME_HALLOWEEN,
        }
    }
}

/// Ordered catalog, as presented to the control surface.
pub const CATALOG: [Descriptor; 8] = [
    Descriptor {
        id: ANIMATION_ID_ALTERNATING,
        name: ANIMATION_NAME_ALTERNATING,
    },
    Descriptor {
        id: ANIMATION_ID_LINE_OUT,
        name: ANIMATION_NAME_LINE_OUT,
    },
    Descriptor {
        id: ANIMATION_ID_MIX,
        name: ANIMATION_NAME_MIX,
    },
    Descriptor {
        id: ANIMATION_ID_RAINY_DAY,
        name: ANIMATION_NAME_RAINY_DAY,
    },
    Descriptor {
        id: ANIMATION_ID_CHRISTMAS,
        name: ANIMATION_NAME_CHRISTMAS,
    },
    Descriptor {
        id: ANIMATION_ID_MELLO_YELLO,
        name: ANIMATION_NAME_MELLO_YELLO,
    },
    Descriptor {
        id: ANIMATION_ID_YULE_LOG,
        name: ANIMATION_NAME_YULE_LOG,
    },
    Descriptor {
        id: ANIMATION_ID_HALLOWEEN,
        name: ANIMATION_NAME_HALLOWEEN,
    },
];

/// Resolve a raw id, `None` when absent from the catalog.
pub fn lookup(id: u8) -> Option<AnimationId> {
    AnimationId::from_raw(id)
}

/// The ordered `(id, name)` catalog.
pub fn list() -> &'static [Descriptor] {
    &CATALOG
}
