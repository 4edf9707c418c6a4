//! Internal macros for CRC engine and variant generation.
//!
//! The 16- and 32-bit engines share identical structure and differ only in
//! register type, width and table generator, so both are stamped out by
//! [`define_crc_engine!`]. Each named variant then gets a small hasher type
//! from [`define_crc_variant!`].

/// Emit a `tracing` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise. Only used on cold paths.
macro_rules! trace_event {
  ($level:ident, $($arg:tt)+) => {
    #[cfg(feature = "tracing")]
    {
      ::tracing::$level!($($arg)+);
    }
  };
}

/// Generate a CRC engine type and its borrowed digest type.
///
/// This macro creates:
/// - The immutable engine struct (parameters + lookup table)
/// - Raw-parameter, precomputed-table and [`CrcParams`](crate::CrcParams) constructors
/// - Read-only accessors
/// - The one-shot `compute` family and the raw register primitives
/// - The digest struct holding the running register, with `std::io::Write`
///
/// # Arguments
///
/// - `$engine` / `$digest`: The type names (e.g., `Crc16` / `Crc16Digest`)
/// - `$reg`: Register type (`u16` or `u32`)
/// - `$width`: Register width in bits
/// - `$table_fn`: Table generator taking `(poly, reflect_in)`
/// - `$reflect_fn`: Register-width bit reflection
macro_rules! define_crc_engine {
  (
    $(#[$outer:meta])*
    engine $engine:ident,
    $(#[$digest_outer:meta])*
    digest $digest:ident,
    register: $reg:ty,
    width: $width:literal,
    table_fn: $table_fn:path,
    reflect_fn: $reflect_fn:path $(,)?
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy)]
    pub struct $engine {
      name: &'static str,
      polynomial: $reg,
      seed: $reg,
      final_xor: $reg,
      reflect_in: bool,
      reflect_out: bool,
      byte_swap: bool,
      table: $crate::common::tables::TableRef<$reg>,
    }

    impl $engine {
      /// Register width in bits.
      pub const WIDTH: u8 = $width;

      /// Digest size in bytes.
      pub const OUTPUT_SIZE: usize = $width / 8;

      /// Build an engine from raw parameters.
      ///
      /// Output reflection follows `reflect_in` and the result is not byte
      /// swapped. The lookup table is generated here.
      #[must_use]
      pub fn new(polynomial: $reg, seed: $reg, final_xor: $reg, reflect_in: bool) -> Self {
        Self::with_options(polynomial, seed, final_xor, reflect_in, reflect_in, false)
      }

      /// Build an engine from the full parameter set.
      ///
      /// The lookup table is generated here: a reflected polynomial with the
      /// shift-right generator when `reflect_in` is set, the normal polynomial
      /// with the shift-left generator otherwise.
      #[must_use]
      pub fn with_options(
        polynomial: $reg,
        seed: $reg,
        final_xor: $reg,
        reflect_in: bool,
        reflect_out: bool,
        byte_swap: bool,
      ) -> Self {
        trace_event!(
          debug,
          width = $width,
          polynomial,
          reflect_in,
          "generating crc lookup table"
        );
        Self {
          name: "custom",
          polynomial,
          seed,
          final_xor,
          reflect_in,
          reflect_out,
          byte_swap,
          table: $crate::common::tables::TableRef::Owned($table_fn(polynomial, reflect_in)),
        }
      }

      /// Build an engine around a precomputed table, skipping generation.
      ///
      /// `table` must be the table [`common::tables`](crate::common::tables)
      /// produces for `(polynomial, reflect_in)`; it is not checked.
      #[must_use]
      pub const fn with_table(
        polynomial: $reg,
        table: &'static [$reg; 256],
        seed: $reg,
        final_xor: $reg,
        reflect_in: bool,
        reflect_out: bool,
        byte_swap: bool,
      ) -> Self {
        Self {
          name: "custom",
          polynomial,
          seed,
          final_xor,
          reflect_in,
          reflect_out,
          byte_swap,
          table: $crate::common::tables::TableRef::Static(table),
        }
      }

      /// Build an engine from a width-generic parameter set, generating the table.
      ///
      /// # Errors
      ///
      /// [`CrcError::WidthMismatch`](crate::CrcError::WidthMismatch) if
      /// `params.width` is not this engine's width, and
      /// [`CrcError::ValueTooWide`](crate::CrcError::ValueTooWide) if the
      /// polynomial, seed or final XOR has bits above it.
      pub fn from_params(params: &$crate::CrcParams) -> Result<Self, $crate::CrcError> {
        Self::check_params(params)?;
        let mut engine = Self::with_options(
          params.polynomial as $reg,
          params.initial as $reg,
          params.xor_out as $reg,
          params.reflect_in,
          params.reflect_out,
          params.byte_swap,
        );
        engine.name = params.name;
        Ok(engine)
      }

      /// Like [`from_params`](Self::from_params), but shares a precomputed table.
      ///
      /// # Errors
      ///
      /// Same as [`from_params`](Self::from_params).
      pub fn from_params_with_table(
        params: &$crate::CrcParams,
        table: &'static [$reg; 256],
      ) -> Result<Self, $crate::CrcError> {
        Self::check_params(params)?;
        Ok(Self::catalogue(params, table))
      }

      fn check_params(params: &$crate::CrcParams) -> Result<(), $crate::CrcError> {
        params.validate($width).inspect_err(|err| {
          trace_event!(warn, name = params.name, error = %err, "rejected crc parameters");
          let _ = err;
        })
      }

      /// Named-variant constructor. Callers guarantee `params` fits the width.
      pub(crate) const fn catalogue(params: &$crate::CrcParams, table: &'static [$reg; 256]) -> Self {
        Self {
          name: params.name,
          polynomial: params.polynomial as $reg,
          seed: params.initial as $reg,
          final_xor: params.xor_out as $reg,
          reflect_in: params.reflect_in,
          reflect_out: params.reflect_out,
          byte_swap: params.byte_swap,
          table: $crate::common::tables::TableRef::Static(table),
        }
      }

      // ───────────────────────────────────────────────────────────────────────
      // Accessors
      // ───────────────────────────────────────────────────────────────────────

      /// Catalogue name, or `"custom"` for engines built from raw parameters.
      #[inline]
      #[must_use]
      pub const fn name(&self) -> &'static str {
        self.name
      }

      /// Generator polynomial in normal form.
      #[inline]
      #[must_use]
      pub const fn polynomial(&self) -> $reg {
        self.polynomial
      }

      /// Initial register value.
      #[inline]
      #[must_use]
      pub const fn seed(&self) -> $reg {
        self.seed
      }

      /// Value XORed into the register at finalize.
      #[inline]
      #[must_use]
      pub const fn final_xor(&self) -> $reg {
        self.final_xor
      }

      #[inline]
      #[must_use]
      pub const fn reflect_in(&self) -> bool {
        self.reflect_in
      }

      #[inline]
      #[must_use]
      pub const fn reflect_out(&self) -> bool {
        self.reflect_out
      }

      #[inline]
      #[must_use]
      pub const fn byte_swap(&self) -> bool {
        self.byte_swap
      }

      /// The 256-entry lookup table.
      #[inline]
      #[must_use]
      pub const fn table(&self) -> &[$reg; 256] {
        self.table.get()
      }

      /// The parameters as a width-generic description.
      #[must_use]
      pub const fn params(&self) -> $crate::CrcParams {
        $crate::CrcParams {
          name: self.name,
          width: $width,
          polynomial: self.polynomial as u64,
          initial: self.seed as u64,
          reflect_in: self.reflect_in,
          reflect_out: self.reflect_out,
          xor_out: self.final_xor as u64,
          byte_swap: self.byte_swap,
        }
      }

      // ───────────────────────────────────────────────────────────────────────
      // Register primitives
      // ───────────────────────────────────────────────────────────────────────

      /// Feed `data` into a raw register and return the new register.
      ///
      /// This is the table-driven inner loop. Passing the returned register
      /// back in continues the same CRC across buffers for every variant.
      #[inline]
      #[must_use]
      // The index is a `u8` and every table has 256 entries.
      #[allow(clippy::indexing_slicing)]
      pub fn update_register(&self, mut register: $reg, data: &[u8]) -> $reg {
        let table = self.table.get();
        if self.reflect_in {
          for &byte in data {
            register = (register >> 8) ^ table[usize::from(register as u8 ^ byte)];
          }
        } else {
          for &byte in data {
            register = (register << 8) ^ table[usize::from((register >> ($width - 8)) as u8 ^ byte)];
          }
        }
        register
      }

      /// Turn a raw register into the CRC value.
      ///
      /// Reflects the register when input and output reflection differ, XORs
      /// the final mask, then swaps the bytes when `byte_swap` is set. The
      /// big-endian bytes of the result are the digest bytes.
      #[inline]
      #[must_use]
      pub const fn finalize_register(&self, register: $reg) -> $reg {
        let reflected = if self.reflect_in != self.reflect_out { $reflect_fn(register) } else { register };
        let value = reflected ^ self.final_xor;
        if self.byte_swap { value.swap_bytes() } else { value }
      }

      /// Digest bytes for a raw register.
      #[inline]
      #[must_use]
      pub const fn finalize_bytes(&self, register: $reg) -> [u8; $width / 8] {
        self.finalize_register(register).to_be_bytes()
      }

      /// Recover the raw register from a finished CRC value.
      ///
      /// Inverse of [`finalize_register`](Self::finalize_register). Continuing
      /// from the returned register extends the CRC that produced `value`.
      #[inline]
      #[must_use]
      pub const fn resume_register(&self, value: $reg) -> $reg {
        let unswapped = if self.byte_swap { value.swap_bytes() } else { value };
        let reflected = unswapped ^ self.final_xor;
        if self.reflect_in != self.reflect_out { $reflect_fn(reflected) } else { reflected }
      }

      // ───────────────────────────────────────────────────────────────────────
      // One-shot
      // ───────────────────────────────────────────────────────────────────────

      /// CRC of `data` from the configured seed.
      #[inline]
      #[must_use]
      pub fn compute(&self, data: &[u8]) -> $reg {
        self.compute_with_seed(self.seed, data)
      }

      /// CRC of `data` starting from `seed` as the raw register.
      ///
      /// Feeding one call's result in as the next call's seed chains the CRC
      /// only when finalization is the identity (no reflection change, zero
      /// final XOR, no byte swap). Use
      /// [`update_register`](Self::update_register) or
      /// [`resume_register`](Self::resume_register) to chain otherwise.
      #[inline]
      #[must_use]
      pub fn compute_with_seed(&self, seed: $reg, data: &[u8]) -> $reg {
        self.finalize_register(self.update_register(seed, data))
      }

      /// CRC of `count` bytes of `buffer` starting at `offset`.
      ///
      /// # Errors
      ///
      /// [`BufferError`]($crate::BufferError) if `offset + count` runs past the
      /// end of `buffer` (or overflows).
      pub fn compute_range(
        &self,
        seed: $reg,
        buffer: &[u8],
        offset: usize,
        count: usize,
      ) -> Result<$reg, $crate::BufferError> {
        let data = $crate::common::range(buffer, offset, count)?;
        Ok(self.compute_with_seed(seed, data))
      }

      /// Digest bytes of `data` from the configured seed.
      ///
      /// Equivalent to `digest()`, `update(data)`, `finalize()`.
      #[inline]
      #[must_use]
      pub fn hash(&self, data: &[u8]) -> [u8; $width / 8] {
        self.finalize_bytes(self.update_register(self.seed, data))
      }

      // ───────────────────────────────────────────────────────────────────────
      // Incremental
      // ───────────────────────────────────────────────────────────────────────

      /// Start an incremental computation from the configured seed.
      #[inline]
      #[must_use]
      pub const fn digest(&self) -> $digest<'_> {
        self.digest_with_seed(self.seed)
      }

      /// Start an incremental computation from a raw register value.
      #[inline]
      #[must_use]
      pub const fn digest_with_seed(&self, seed: $reg) -> $digest<'_> {
        $digest { engine: self, register: seed, initial: seed }
      }
    }

    impl core::fmt::Debug for $engine {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct(stringify!($engine))
          .field("name", &self.name)
          .field("polynomial", &format_args!("{:#x}", self.polynomial))
          .field("seed", &format_args!("{:#x}", self.seed))
          .field("final_xor", &format_args!("{:#x}", self.final_xor))
          .field("reflect_in", &self.reflect_in)
          .field("reflect_out", &self.reflect_out)
          .field("byte_swap", &self.byte_swap)
          .field("table", &if self.table.is_static() { "static" } else { "owned" })
          .finish()
      }
    }

    $(#[$digest_outer])*
    #[derive(Clone, Debug)]
    pub struct $digest<'a> {
      engine: &'a $engine,
      register: $reg,
      initial: $reg,
    }

    impl<'a> $digest<'a> {
      /// Feed more bytes.
      #[inline]
      pub fn update(&mut self, data: &[u8]) {
        self.register = self.engine.update_register(self.register, data);
      }

      /// Feed `count` bytes of `buffer` starting at `offset`.
      ///
      /// # Errors
      ///
      /// [`BufferError`]($crate::BufferError) if the range runs past the end of
      /// `buffer`; the register is unchanged.
      pub fn update_range(&mut self, buffer: &[u8], offset: usize, count: usize) -> Result<(), $crate::BufferError> {
        let data = $crate::common::range(buffer, offset, count)?;
        self.update(data);
        Ok(())
      }

      /// Digest bytes for everything fed so far.
      ///
      /// Does not reset the register: further updates continue the same
      /// computation. Call [`reset`](Self::reset) before starting a new one.
      #[inline]
      #[must_use]
      pub const fn finalize(&self) -> [u8; $width / 8] {
        self.engine.finalize_bytes(self.register)
      }

      /// The finished CRC value, in the same form the engine's `compute` returns.
      #[inline]
      #[must_use]
      pub const fn value(&self) -> $reg {
        self.engine.finalize_register(self.register)
      }

      /// The raw register.
      #[inline]
      #[must_use]
      pub const fn register(&self) -> $reg {
        self.register
      }

      /// Return to the seed this digest was started with.
      #[inline]
      pub fn reset(&mut self) {
        self.register = self.initial;
      }

      /// The engine this digest borrows.
      #[inline]
      #[must_use]
      pub const fn engine(&self) -> &'a $engine {
        self.engine
      }
    }

    #[cfg(feature = "std")]
    impl std::io::Write for $digest<'_> {
      #[inline]
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
      }

      #[inline]
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }
  };
}

/// Generate a named CRC variant hasher type.
///
/// This macro creates:
/// - The struct definition with `register` and `initial` state
/// - `engine()`, `resume()`, `register()` and `finalize_bytes()` methods
/// - `Checksum` trait implementation
/// - `std::io::Write` implementation (with `std`)
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc16Ibm`)
/// - `$engine`: The engine type (`Crc16` or `Crc32`)
/// - `$reg`: Register type
/// - `$ctor`: Const engine constructor (e.g., `Crc16::ibm()`)
macro_rules! define_crc_variant {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      engine: $engine:ident,
      register: $reg:ty,
      ctor: $ctor:expr $(,)?
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    $vis struct $name {
      register: $reg,
      initial: $reg,
    }

    impl $name {
      /// The shared engine for this variant.
      #[inline]
      #[must_use]
      pub fn engine() -> &'static $engine {
        static ENGINE: $engine = $ctor;
        &ENGINE
      }

      /// Create a hasher that continues from a finished CRC value.
      ///
      /// `Self::resume(a)` fed with `b` finalizes to the CRC of `a`'s data
      /// followed by `b`.
      #[inline]
      #[must_use]
      pub fn resume(crc: $reg) -> Self {
        let register = Self::engine().resume_register(crc);
        Self { register, initial: register }
      }

      /// The raw register.
      #[inline]
      #[must_use]
      pub const fn register(&self) -> $reg {
        self.register
      }

      /// Digest bytes for everything fed so far.
      #[inline]
      #[must_use]
      pub fn finalize_bytes(&self) -> [u8; core::mem::size_of::<$reg>()] {
        Self::engine().finalize_bytes(self.register)
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as $crate::Checksum>::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<$reg>();
      type Output = $reg;

      #[inline]
      fn new() -> Self {
        let seed = Self::engine().seed();
        Self { register: seed, initial: seed }
      }

      #[inline]
      fn with_initial(initial: $reg) -> Self {
        Self { register: initial, initial }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.register = Self::engine().update_register(self.register, data);
      }

      #[inline]
      fn finalize(&self) -> $reg {
        Self::engine().finalize_register(self.register)
      }

      #[inline]
      fn reset(&mut self) {
        self.register = self.initial;
      }
    }

    #[cfg(feature = "std")]
    impl std::io::Write for $name {
      #[inline]
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        $crate::Checksum::update(self, buf);
        Ok(buf.len())
      }

      #[inline]
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }
  };
}
