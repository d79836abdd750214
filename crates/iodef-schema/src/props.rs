//! Shorthand constructors for the descriptor tables.

use iodef_core::{PropertyDescriptor as P, PropertyKind as K, Vocabulary};

pub(crate) const fn text(name: &'static str) -> P {
    P::single(name, K::Text)
}

pub(crate) const fn texts(name: &'static str) -> P {
    P::repeated(name, K::Text)
}

pub(crate) const fn integer(name: &'static str) -> P {
    P::single(name, K::Integer)
}

pub(crate) const fn real(name: &'static str) -> P {
    P::single(name, K::Real)
}

pub(crate) const fn datetime(name: &'static str) -> P {
    P::single(name, K::DateTime)
}

pub(crate) const fn token(name: &'static str) -> P {
    P::single(name, K::Token)
}

pub(crate) const fn tokens(name: &'static str) -> P {
    P::repeated(name, K::Token)
}

pub(crate) const fn closed(name: &'static str, vocabulary: &'static Vocabulary) -> P {
    P::single(name, K::Enum(vocabulary))
}

/// Extensible enumeration; the companion must be declared separately with
/// [`text`], directly after the primary.
pub(crate) const fn ext(
    name: &'static str,
    companion: &'static str,
    vocabulary: &'static Vocabulary,
) -> P {
    P::single(
        name,
        K::ExtEnum {
            vocabulary,
            companion,
        },
    )
}

pub(crate) const fn one(name: &'static str, node_type: &'static str) -> P {
    P::single(name, K::Node(node_type))
}

pub(crate) const fn many(name: &'static str, node_type: &'static str) -> P {
    P::repeated(name, K::Node(node_type))
}
