//! Small convenience macros shared by the library and the binary.

/// Construct a [`Complex64`][num_complex::Complex64].
///
/// ```
/// use rabi_bloch::c;
/// let a = c!(1.0);
/// let b = c!(i 2.0);
/// let z = c!(1.0, -2.0);
/// assert_eq!(a + b, z.conj());
/// ```
#[macro_export]
macro_rules! c {
    ( i $im:expr ) => {
        ::num_complex::Complex64::new(0.0, $im)
    };
    ( $re:expr, $im:expr ) => {
        ::num_complex::Complex64::new($re, $im)
    };
    ( $re:expr ) => {
        ::num_complex::Complex64::new($re, 0.0)
    };
}

/// Create a directory and all its parents if it doesn't already exist.
///
/// Must be used in a function returning `Result<_, E>` where `E:
/// From<std::io::Error>`.
#[macro_export]
macro_rules! mkdir {
    ( $dir:expr ) => {
        {
            let _dir_: &::std::path::Path = $dir.as_ref();
            if !_dir_.is_dir() {
                ::std::fs::create_dir_all(_dir_)?;
            }
        }
    };
}

/// Write a series of named arrays to a single `.npz` archive.
///
/// ```ignore
/// write_npz!(
///     outdir.join("data.npz"),
///     arrays: {
///         "time" => &time,
///         "x" => &x,
///     }
/// );
/// ```
///
/// Must be used in a function returning `Result<_, E>` where `E` can be built
/// from both [`std::io::Error`] and [`ndarray_npy::WriteNpzError`].
#[macro_export]
macro_rules! write_npz {
    (
        $filename:expr,
        arrays: { $( $key:expr => $arr:expr ),+ $(,)? }
    ) => {
        {
            let _file_ = ::std::fs::File::create($filename)?;
            let mut _npz_ = ::ndarray_npy::NpzWriter::new(_file_);
            $(
                _npz_.add_array($key, $arr)?;
            )+
            _npz_.finish()?;
        }
    };
}

#[cfg(test)]
mod test {
    use num_complex::Complex64 as C64;

    #[test]
    fn complex_literals() {
        assert_eq!(c!(1.5), C64::new(1.5, 0.0));
        assert_eq!(c!(i 0.5), C64::new(0.0, 0.5));
        assert_eq!(c!(1.0, -1.0), C64::new(1.0, -1.0));
        let theta = 0.25;
        assert_eq!(c!(i -theta / 2.0), C64::new(0.0, -0.125));
    }
}
