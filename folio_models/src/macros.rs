/// Declares a string newtype whose values are trimmed with
/// [`trim_contact_value`](crate::contact::trim_contact_value) on construction
/// and on deserialization.
macro_rules! trimmed_string {
    ($(#[$meta:meta])* $ident:ident) => {
        $(#[$meta])*
        #[::nutype::nutype(
            sanitize(with = |s: String| crate::contact::trim_contact_value(&s).to_owned()),
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                Deref,
                AsRef,
                From,
                Display,
                Serialize,
                Deserialize,
            )
        )]
        pub struct $ident(String);
    };
}

pub(crate) use trimmed_string;
