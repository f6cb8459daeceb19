/// Declares structs whose fields are all public.
///
/// Field-level attributes (doc comments, `#[serde(...)]`) are carried over.
#[macro_export]
macro_rules! pub_fields_struct {
    {
        $(
            $(#[$($attr:tt)*])*
            struct $name:ident {
                $(
                    $(#[$($field_attr:tt)*])*
                    $field:ident: $t:ty,
                )*
            }
        )*
    } => {
        $(
            $(#[$($attr)*])*
            pub struct $name {
                $(
                    $(#[$($field_attr)*])*
                    pub $field: $t,
                )*
            }
        )*
    }
}

/// Declares a closed, fieldless enum that also has a compact `u8` code.
///
/// Codes follow declaration order starting at zero. `from_code` returns `None`
/// for a code outside the declared range; callers decide how loudly to fail.
#[macro_export]
macro_rules! code_enum {
    {
        $(#[$($attr:tt)*])*
        enum $name:ident {
            $(
                $(#[$($variant_attr:tt)*])*
                $variant:ident,
            )*
        }
    } => {
        $(#[$($attr)*])*
        #[derive(Clone, Copy)]
        #[repr(u8)]
        pub enum $name {
            $(
                $(#[$($variant_attr)*])*
                $variant,
            )*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub const fn code(self) -> u8 {
                self as u8
            }

            pub fn from_code(code: u8) -> Option<Self> {
                Self::ALL.get(code as usize).copied()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    code_enum! {
        #[derive(Debug, PartialEq)]
        enum Direction {
            North,
            East,
            South,
        }
    }

    pub_fields_struct! {
        #[derive(Debug, Default)]
        struct Point {
            /// Horizontal.
            x: i32,
            y: i32,
        }
    }

    #[test]
    fn codes_follow_declaration_order() {
        assert_eq!(Direction::North.code(), 0);
        assert_eq!(Direction::South.code(), 2);
        assert_eq!(Direction::from_code(1), Some(Direction::East));
        assert_eq!(Direction::from_code(3), None);
        assert_eq!(Direction::ALL.len(), 3);
    }

    #[test]
    fn fields_are_public() {
        let p = Point { x: 1, ..Default::default() };
        assert_eq!((p.x, p.y), (1, 0));
    }
}
