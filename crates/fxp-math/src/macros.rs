//! Code generation shared by the vector types.
//!
//! Every vector operation is a component-wise application of a scalar
//! operation, so the three vector types are generated from one set of
//! macros parameterised by their component names.

/// Implements a component-wise binary operator between two vectors.
macro_rules! impl_vector_vector_binary_operator {
    (
        // Name of the vector type.
        $Vector:ty,
        // Names of the components, with parentheses, for example `(x, y)`.
        ($($components:ident),*),
        // Name of the operator trait, for example `Add`.
        $Operator:ident,
        // Name of the function on the operator trait, for example `add`.
        $func:ident
    ) => {
        impl std::ops::$Operator for $Vector {
            type Output = Self;

            #[inline]
            fn $func(mut self, rhs: $Vector) -> Self::Output {
                $(
                    self.$components = std::ops::$Operator::$func(self.$components, rhs.$components);
                )*
                self
            }
        }
    };
}

/// Implements a component-wise binary operator between a vector on the left and a
/// scalar on the right-hand side.
macro_rules! impl_vector_scalar_binary_operator {
    (
        $Vector:ty,
        ($($components:ident),*),
        $Operator:ident,
        $func:ident
    ) => {
        impl std::ops::$Operator<fxp_core::Fixed> for $Vector {
            type Output = Self;

            #[inline]
            fn $func(mut self, rhs: fxp_core::Fixed) -> Self::Output {
                $(
                    self.$components = std::ops::$Operator::$func(self.$components, rhs);
                )*
                self
            }
        }
    };
}

/// Implements a component-wise binary operator between a scalar on the left and a
/// vector on the right-hand side.
macro_rules! impl_scalar_vector_binary_operator {
    (
        $Vector:ty,
        ($($components:ident),*),
        $Operator:ident,
        $func:ident
    ) => {
        impl std::ops::$Operator<$Vector> for fxp_core::Fixed {
            type Output = $Vector;

            #[inline]
            fn $func(self, mut rhs: $Vector) -> Self::Output {
                $(
                    rhs.$components = std::ops::$Operator::$func(self, rhs.$components);
                )*
                rhs
            }
        }
    };
}

/// Implements a compound assignment operator by forwarding to the binary one.
macro_rules! impl_vector_assign_operator {
    (
        $Vector:ty,
        $Rhs:ty,
        $Operator:ident,
        $func:ident,
        $BinaryOperator:ident,
        $binary_func:ident
    ) => {
        impl std::ops::$Operator<$Rhs> for $Vector {
            #[inline]
            fn $func(&mut self, rhs: $Rhs) {
                *self = std::ops::$BinaryOperator::$binary_func(*self, rhs);
            }
        }
    };
}

/// Implements all arithmetic operators, `Index`/`IndexMut` and the
/// `Sum` reduction on a vector type.
///
/// Division panics on a zero component, exactly like scalar division.
macro_rules! impl_vector_operators {
    (
        // Name of the vector type to be implemented, for example `FVec2`.
        $Vector:ident,
        // Names of the components, with parentheses, for example `(x, y)`.
        ($($components:ident),*),
        // Component indices in the same order, for example `(0, 1)`.
        ($($indices:literal),*)
    ) => {
        impl std::ops::Neg for $Vector {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($components: -self.$components),* }
            }
        }

        impl_vector_vector_binary_operator!($Vector, ($($components),*), Add, add);
        impl_vector_vector_binary_operator!($Vector, ($($components),*), Sub, sub);
        impl_vector_vector_binary_operator!($Vector, ($($components),*), Mul, mul);
        impl_vector_vector_binary_operator!($Vector, ($($components),*), Div, div);
        impl_vector_vector_binary_operator!($Vector, ($($components),*), Rem, rem);
        impl_vector_scalar_binary_operator!($Vector, ($($components),*), Mul, mul);
        impl_scalar_vector_binary_operator!($Vector, ($($components),*), Mul, mul);
        impl_vector_scalar_binary_operator!($Vector, ($($components),*), Div, div);
        impl_vector_scalar_binary_operator!($Vector, ($($components),*), Rem, rem);

        impl_vector_assign_operator!($Vector, $Vector, AddAssign, add_assign, Add, add);
        impl_vector_assign_operator!($Vector, $Vector, SubAssign, sub_assign, Sub, sub);
        impl_vector_assign_operator!($Vector, $Vector, MulAssign, mul_assign, Mul, mul);
        impl_vector_assign_operator!($Vector, $Vector, DivAssign, div_assign, Div, div);
        impl_vector_assign_operator!($Vector, $Vector, RemAssign, rem_assign, Rem, rem);
        impl_vector_assign_operator!($Vector, fxp_core::Fixed, MulAssign, mul_assign, Mul, mul);
        impl_vector_assign_operator!($Vector, fxp_core::Fixed, DivAssign, div_assign, Div, div);
        impl_vector_assign_operator!($Vector, fxp_core::Fixed, RemAssign, rem_assign, Rem, rem);

        impl std::iter::Sum for $Vector {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, v| acc + v)
            }
        }

        impl<'a> std::iter::Sum<&'a $Vector> for $Vector {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, v| acc + *v)
            }
        }

        impl std::ops::Index<usize> for $Vector {
            type Output = fxp_core::Fixed;

            #[inline]
            fn index(&self, i: usize) -> &fxp_core::Fixed {
                match i {
                    $($indices => &self.$components,)*
                    _ => panic!("{} index out of bounds: {}", stringify!($Vector), i),
                }
            }
        }

        impl std::ops::IndexMut<usize> for $Vector {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut fxp_core::Fixed {
                match i {
                    $($indices => &mut self.$components,)*
                    _ => panic!("{} index out of bounds: {}", stringify!($Vector), i),
                }
            }
        }
    };
}

/// Implements constructors, conversions and the component-wise function
/// family shared by every vector type.
macro_rules! impl_vector_fns {
    (
        // Name of the vector type to be implemented, for example `FVec2`.
        $Vector:ident,
        // Number of components.
        $n:literal,
        // Names of the components, with parentheses, for example `(x, y)`.
        ($($components:ident),*),
        // Component indices in the same order, for example `(0, 1)`.
        ($($indices:literal),*)
    ) => {
        impl $Vector {
            /// All components zero.
            pub const ZERO: Self = Self::splat(fxp_core::Fixed::ZERO);

            /// All components one.
            pub const ONE: Self = Self::splat(fxp_core::Fixed::ONE);

            /// All components negative one.
            pub const NEG_ONE: Self = Self::splat(fxp_core::Fixed::NEG_ONE);

            /// All components [`Fixed::MIN`](fxp_core::Fixed::MIN).
            pub const MIN: Self = Self::splat(fxp_core::Fixed::MIN);

            /// All components [`Fixed::MAX`](fxp_core::Fixed::MAX).
            pub const MAX: Self = Self::splat(fxp_core::Fixed::MAX);

            /// Creates a new vector.
            #[inline]
            pub const fn new($($components: fxp_core::Fixed),*) -> Self {
                Self { $($components),* }
            }

            /// Creates a vector with all components set to `v`.
            #[inline]
            pub const fn splat(v: fxp_core::Fixed) -> Self {
                Self { $($components: v),* }
            }

            /// Creates a vector from integer components.
            #[inline]
            pub const fn from_ints($($components: i32),*) -> Self {
                Self { $($components: fxp_core::Fixed::from_int($components as i64)),* }
            }

            /// Creates from an array.
            #[inline]
            pub const fn from_array(a: [fxp_core::Fixed; $n]) -> Self {
                Self { $($components: a[$indices]),* }
            }

            /// Converts to an array.
            #[inline]
            pub const fn to_array(self) -> [fxp_core::Fixed; $n] {
                [$(self.$components),*]
            }

            /// Converts to an array of `f64`, for display or export only.
            #[inline]
            pub fn to_f64_array(self) -> [f64; $n] {
                [$(self.$components.to_f64()),*]
            }

            /// Applies `f` to every component.
            #[inline]
            pub fn map(self, mut f: impl FnMut(fxp_core::Fixed) -> fxp_core::Fixed) -> Self {
                Self { $($components: f(self.$components)),* }
            }

            /// Combines matching components of two vectors with `f`.
            #[inline]
            pub fn zip_map(
                self,
                other: Self,
                mut f: impl FnMut(fxp_core::Fixed, fxp_core::Fixed) -> fxp_core::Fixed,
            ) -> Self {
                Self { $($components: f(self.$components, other.$components)),* }
            }

            /// Dot product. Each product is rounded, and the sum saturates.
            #[inline]
            pub fn dot(self, other: Self) -> fxp_core::Fixed {
                fxp_core::Fixed::ZERO $(+ self.$components * other.$components)*
            }

            /// Squared length (no square root).
            #[inline]
            pub fn length_squared(self) -> fxp_core::Fixed {
                self.dot(self)
            }

            /// Length (magnitude) of the vector.
            ///
            /// Saturates when the squared length exceeds the scalar range.
            #[inline]
            pub fn length(self) -> fxp_core::Fixed {
                // A sum of rounded squares is never negative.
                self.length_squared().sqrt().unwrap_or(fxp_core::Fixed::ZERO)
            }

            /// Distance to another point.
            #[inline]
            pub fn distance(self, other: Self) -> fxp_core::Fixed {
                (other - self).length()
            }

            /// Squared distance to another point.
            #[inline]
            pub fn distance_squared(self, other: Self) -> fxp_core::Fixed {
                (other - self).length_squared()
            }

            /// Normalizes the vector to unit length.
            ///
            /// Returns zero vector if length is zero.
            #[inline]
            pub fn normalize(self) -> Self {
                self.try_normalize().unwrap_or(Self::ZERO)
            }

            /// Normalizes the vector to unit length.
            ///
            /// # Errors
            ///
            /// [`Error::DivisionByZero`](fxp_core::Error::DivisionByZero) when
            /// the length rounds to zero.
            #[inline]
            pub fn try_normalize(self) -> fxp_core::Result<Self> {
                let len = self.length();
                Ok(Self { $($components: self.$components.try_div(len)?),* })
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $($components: self.$components.min(other.$components)),* }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $($components: self.$components.max(other.$components)),* }
            }

            /// Clamps each component to `[min, max]`. Never panics.
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self { $($components: fxp_core::clamp(self.$components, min.$components, max.$components)),* }
            }

            /// Clamps each component to `[0, 1]`.
            #[inline]
            pub fn saturate(self) -> Self {
                self.map(fxp_core::saturate)
            }

            /// Returns the smallest component.
            #[inline]
            pub fn min_element(self) -> fxp_core::Fixed {
                fxp_core::Fixed::MAX $(.min(self.$components))*
            }

            /// Returns the largest component.
            #[inline]
            pub fn max_element(self) -> fxp_core::Fixed {
                fxp_core::Fixed::MIN $(.max(self.$components))*
            }

            /// Sum of all components.
            #[inline]
            pub fn element_sum(self) -> fxp_core::Fixed {
                fxp_core::Fixed::ZERO $(+ self.$components)*
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                self.map(fxp_core::Fixed::abs)
            }

            /// Component-wise sign (`-1`, `0` or `1`).
            #[inline]
            pub fn sign(self) -> Self {
                self.map(fxp_core::Fixed::sign)
            }

            /// Component-wise floor.
            #[inline]
            pub fn floor(self) -> Self {
                self.map(fxp_core::Fixed::floor)
            }

            /// Component-wise ceiling.
            #[inline]
            pub fn ceil(self) -> Self {
                self.map(fxp_core::Fixed::ceil)
            }

            /// Component-wise rounding, ties away from zero.
            #[inline]
            pub fn round(self) -> Self {
                self.map(fxp_core::Fixed::round)
            }

            /// Component-wise truncation toward zero.
            #[inline]
            pub fn trunc(self) -> Self {
                self.map(fxp_core::Fixed::trunc)
            }

            /// Component-wise fractional part.
            #[inline]
            pub fn fract(self) -> Self {
                self.map(fxp_core::Fixed::fract)
            }

            /// Component-wise rounding with an explicit mode.
            #[inline]
            pub fn round_with(self, mode: fxp_core::Rounding) -> Self {
                self.map(|c| c.round_with(mode))
            }

            /// Linear interpolation between self and other.
            ///
            /// `t = 0` returns self, `t = 1` returns other.
            #[inline]
            pub fn lerp(self, other: Self, t: fxp_core::Fixed) -> Self {
                self.zip_map(other, |a, b| fxp_core::lerp(a, b, t))
            }

            /// Component-wise [`smoothstep`](fxp_core::smoothstep) of `self`
            /// between `edge0` and `edge1`.
            #[inline]
            pub fn smoothstep(self, edge0: Self, edge1: Self) -> Self {
                Self {
                    $($components: fxp_core::smoothstep(edge0.$components, edge1.$components, self.$components)),*
                }
            }

            /// Moves toward `target` by at most `max_delta`, never overshooting.
            #[inline]
            pub fn move_toward(self, target: Self, max_delta: fxp_core::Fixed) -> Self {
                let delta = target - self;
                let dist = delta.length();
                if dist <= max_delta || dist.is_zero() {
                    return target;
                }
                self + delta * max_delta / dist
            }

            /// One step of a damped spring toward `target`, per component.
            ///
            /// Returns `(position, velocity)`. See
            /// [`smooth_damp`](fxp_core::smooth_damp).
            pub fn smooth_damp(
                self,
                target: Self,
                velocity: Self,
                smooth_time: fxp_core::Fixed,
                delta_time: fxp_core::Fixed,
            ) -> (Self, Self) {
                let mut position = Self::ZERO;
                let mut new_velocity = Self::ZERO;
                $(
                    (position.$components, new_velocity.$components) = fxp_core::smooth_damp(
                        self.$components,
                        target.$components,
                        velocity.$components,
                        smooth_time,
                        delta_time,
                    );
                )*
                (position, new_velocity)
            }
        }

        impl From<[fxp_core::Fixed; $n]> for $Vector {
            #[inline]
            fn from(a: [fxp_core::Fixed; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$Vector> for [fxp_core::Fixed; $n] {
            #[inline]
            fn from(v: $Vector) -> Self {
                v.to_array()
            }
        }

        impl std::fmt::Display for $Vector {
            /// Writes `(x, y, ...)`, forwarding precision and width to each component.
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("(")?;
                let mut first = true;
                $(
                    if !std::mem::take(&mut first) {
                        f.write_str(", ")?;
                    }
                    std::fmt::Display::fmt(&self.$components, f)?;
                )*
                f.write_str(")")
            }
        }

        impl std::str::FromStr for $Vector {
            type Err = fxp_core::Error;

            /// Parses `(x, y, ...)` or `x, y, ...`; components use the invariant format.
            fn from_str(s: &str) -> fxp_core::Result<Self> {
                let inner = s.trim();
                let inner = inner
                    .strip_prefix('(')
                    .and_then(|rest| rest.strip_suffix(')'))
                    .unwrap_or(inner);
                let mut parts = inner.split(',');
                let mut out = Self::ZERO;
                for slot in 0..$n {
                    let part = parts
                        .next()
                        .ok_or_else(|| fxp_core::Error::parse(s, "too few components"))?;
                    out[slot] = part.parse()?;
                }
                if parts.next().is_some() {
                    return Err(fxp_core::Error::parse(s, "too many components"));
                }
                Ok(out)
            }
        }
    };
}
