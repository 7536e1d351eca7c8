use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Serde goes through the same string table, so the wire form is the
/// `as_str` value rather than the variant name.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Same idea for the integer-coded columns the clinic API sends.
macro_rules! int_enum {
    ($name:ident { $($variant:ident => $n:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_i32(&self) -> i32 {
                match self {
                    $(Self::$variant => $n),+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ModelError;

            fn try_from(n: i32) -> Result<Self, Self::Error> {
                match n {
                    $($n => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: n.to_string(),
                    }),
                }
            }
        }

        /// Parses the decimal code, as it arrives in a query string.
        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let n: i32 = s.trim().parse().map_err(|_| ModelError::InvalidEnum {
                    field: stringify!($name).into(),
                    value: s.into(),
                })?;
                Self::try_from(n)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i32(self.as_i32())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <i32 as serde::Deserialize>::deserialize(deserializer)?;
                Self::try_from(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

str_enum!(AbnormalFlag {
    High => "H",
    Low => "L",
    Normal => "N",
});

str_enum!(PaymentMethod {
    Cash => "cash",
    Card => "card",
    Insurer => "insurer",
});

str_enum!(UserRole {
    Patient => "patient",
    Provider => "provider",
});

str_enum!(Sex {
    Male => "M",
    Female => "F",
    Other => "O",
});

int_enum!(EncounterStatus {
    Draft => 1,
    Final => 2,
});

int_enum!(SessionStatus {
    Stopped => 0,
    Open => 1,
});

int_enum!(SessionPeriod {
    Morning => 1,
    Afternoon => 2,
    Evening => 3,
});

impl AbnormalFlag {
    /// High and Low count as abnormal; Normal does not.
    pub fn is_abnormal(&self) -> bool {
        matches!(self, Self::High | Self::Low)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Low => "Low",
            Self::Normal => "Normal",
        }
    }
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Credit card",
            Self::Insurer => "Insurance",
        }
    }
}

impl EncounterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Final => "Final",
        }
    }
}

/// Appointment lifecycle as reported by the clinic API.
///
/// Unlike the other coded columns this one never fails to decode:
/// an unrecognised code is kept as `Unknown` so the row still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    Booked,
    CheckedIn,
    Completed,
    Cancelled,
    NoShow,
    Waitlisted,
    Unknown(i32),
}

impl AppointmentStatus {
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::Booked => 1,
            Self::CheckedIn => 2,
            Self::Completed => 3,
            Self::Cancelled => 4,
            Self::NoShow => 5,
            Self::Waitlisted => 6,
            Self::Unknown(n) => *n,
        }
    }
}

impl From<i32> for AppointmentStatus {
    fn from(n: i32) -> Self {
        match n {
            1 => Self::Booked,
            2 => Self::CheckedIn,
            3 => Self::Completed,
            4 => Self::Cancelled,
            5 => Self::NoShow,
            6 => Self::Waitlisted,
            other => Self::Unknown(other),
        }
    }
}

impl serde::Serialize for AppointmentStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

impl<'de> serde::Deserialize<'de> for AppointmentStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from(<i32 as serde::Deserialize>::deserialize(deserializer)?))
    }
}
