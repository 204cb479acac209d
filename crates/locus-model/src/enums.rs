//! Closed literal sets used by string fields.
//!
//! Shapes store these fields as `String` so values the service adds later
//! still round-trip; the enums are typed helpers for building and matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $literal:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// Every literal, in service order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire literal.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok(Self::$variant),)+
                    _ => Err(ModelError::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

string_enum! {
    /// Mode of transport a route is calculated for.
    TravelMode {
        Car => "Car",
        /// Honors truck mode options such as dimensions and weight.
        Truck => "Truck",
        Walking => "Walking",
    }
}

string_enum! {
    DistanceUnit {
        Kilometers => "Kilometers",
        Miles => "Miles",
    }
}

string_enum! {
    /// Unit of truck dimensions.
    DimensionUnit {
        Meters => "Meters",
        Feet => "Feet",
    }
}

string_enum! {
    VehicleWeightUnit {
        Kilograms => "Kilograms",
        Pounds => "Pounds",
    }
}

string_enum! {
    /// Deprecated billing plan still accepted on resource creation.
    PricingPlan {
        RequestBasedUsage => "RequestBasedUsage",
        MobileAssetTracking => "MobileAssetTracking",
        MobileAssetManagement => "MobileAssetManagement",
    }
}

string_enum! {
    /// Whether place search results may be stored.
    IntendedUse {
        SingleUse => "SingleUse",
        Storage => "Storage",
    }
}

string_enum! {
    PositionFiltering {
        TimeBased => "TimeBased",
        DistanceBased => "DistanceBased",
        AccuracyBased => "AccuracyBased",
    }
}

string_enum! {
    /// Lifecycle status of a stored geofence.
    GeofenceStatus {
        Active => "ACTIVE",
        Pending => "PENDING",
        Failed => "FAILED",
        Deleted => "DELETED",
        Deleting => "DELETING",
    }
}

string_enum! {
    ForecastedGeofenceEventType {
        Enter => "ENTER",
        Exit => "EXIT",
        Idle => "IDLE",
    }
}

string_enum! {
    SpeedUnit {
        KilometersPerHour => "KilometersPerHour",
        MilesPerHour => "MilesPerHour",
    }
}

string_enum! {
    /// Why one departure/destination pair of a route matrix has no route.
    RouteMatrixErrorCode {
        RouteNotFound => "RouteNotFound",
        RouteTooLong => "RouteTooLong",
        PositionsNotFound => "PositionsNotFound",
        DestinationPositionNotFound => "DestinationPositionNotFound",
        DeparturePositionNotFound => "DeparturePositionNotFound",
        OtherValidationError => "OtherValidationError",
    }
}

string_enum! {
    BatchItemErrorCode {
        AccessDeniedError => "AccessDeniedError",
        ConflictError => "ConflictError",
        InternalServerError => "InternalServerError",
        ResourceNotFoundError => "ResourceNotFoundError",
        ThrottlingError => "ThrottlingError",
        ValidationError => "ValidationError",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_roundtrip() {
        for mode in TravelMode::ALL {
            assert_eq!(mode.as_str().parse::<TravelMode>().unwrap(), *mode);
        }
        for status in GeofenceStatus::ALL {
            assert_eq!(status.to_string().parse::<GeofenceStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn unknown_literal_is_rejected() {
        let err = "car".parse::<TravelMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown TravelMode value: car");
    }

    #[test]
    fn uppercase_wire_literals() {
        assert_eq!(ForecastedGeofenceEventType::Enter.as_str(), "ENTER");
        assert_eq!(String::from(GeofenceStatus::Deleting), "DELETING");
    }

    #[test]
    fn serde_uses_wire_literal() {
        let json = serde_json::to_string(&GeofenceStatus::Active).unwrap();
        assert_eq!(json, "\"ACTIVE\"");
        let unit: DistanceUnit = serde_json::from_str("\"Miles\"").unwrap();
        assert_eq!(unit, DistanceUnit::Miles);
    }
}
