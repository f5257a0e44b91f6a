//! Container-level integration tests, covering the end-to-end
//! `load_nitf_bytes` path across a File Header, an Image Subheader, and
//! pixel data - the scope no single unit test in `src/` exercises.

use nitf::NitfError;
use nitf::container::load_nitf_bytes;
use nitf::options::Options;

fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .try_init();
}

/// Byte offset of `FL` within the fixed prefix built by [`file_header_bytes`].
const FL_POS: usize = 342;

/// A fixed-position File Header prefix, with `NUMI` image segments
/// described by `descriptors` (subheader length, data length). `FL` is left
/// as all-zero text; callers patch it once the total length is known.
fn file_header_bytes(descriptors: &[(usize, usize)]) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(b"NITF"); // FHDR
    b.extend_from_slice(b"02.10"); // FVER
    b.extend_from_slice(b"03"); // CLEVEL
    b.extend_from_slice(b"BF01"); // STYPE
    b.extend_from_slice(&[b' '; 10]); // OSTAID
    b.extend_from_slice(b"20260101000000"); // FDT
    b.extend_from_slice(&[b' '; 80]); // FTITLE
    b.push(b'U'); // FSCLAS
    b.extend_from_slice(&[b' '; 2]); // FSCLSY
    b.extend_from_slice(&[b' '; 11]); // FSCODE
    b.extend_from_slice(&[b' '; 2]); // FSCTLH
    b.extend_from_slice(&[b' '; 20]); // FSREL
    b.extend_from_slice(&[b' '; 2]); // FSDCTP
    b.extend_from_slice(&[b' '; 8]); // FSDCDT
    b.extend_from_slice(&[b' '; 4]); // FSDCXM
    b.extend_from_slice(&[b' '; 1]); // FSDG
    b.extend_from_slice(&[b' '; 8]); // FSDGDT
    b.extend_from_slice(&[b' '; 43]); // FSCLTX
    b.extend_from_slice(&[b' '; 1]); // FSCATP
    b.extend_from_slice(&[b' '; 40]); // FSCAUT
    b.extend_from_slice(&[b' '; 1]); // FSCRSN
    b.extend_from_slice(&[b' '; 8]); // FSSRDT
    b.extend_from_slice(&[b' '; 15]); // FSCTLN
    b.extend_from_slice(b"00001"); // FSCOP
    b.extend_from_slice(b"00001"); // FSCPYS
    b.push(b'0'); // ENCRYPT
    b.extend_from_slice(&[0, 0, 0]); // FBKGC
    b.extend_from_slice(&[b' '; 24]); // ONAME
    b.extend_from_slice(&[b' '; 18]); // OPHONE
    assert_eq!(b.len(), FL_POS, "FL_POS drifted from the fixed prefix layout");
    b.extend_from_slice(b"000000000000"); // FL, patched by `patch_fl`
    let hl_pos = b.len();
    b.extend_from_slice(b"000000"); // HL, patched below
    b.extend_from_slice(format!("{:03}", descriptors.len()).as_bytes()); // NUMI
    for (subheader_len, data_len) in descriptors {
        b.extend_from_slice(format!("{subheader_len:06}").as_bytes()); // LISH_n
        b.extend_from_slice(format!("{data_len:010}").as_bytes()); // LI_n
    }
    b.extend_from_slice(b"000"); // NUMS
    b.extend_from_slice(b"000"); // NUMX
    b.extend_from_slice(b"000"); // NUMT
    b.extend_from_slice(b"000"); // NUMDES
    b.extend_from_slice(b"000"); // NUM_RES
    b.extend_from_slice(b"00000"); // UDHDL
    b.extend_from_slice(b"00000"); // XHDL

    let hl = b.len();
    b[hl_pos..hl_pos + 6].copy_from_slice(format!("{hl:06}").as_bytes());
    b
}

/// Patches `FL` in-place to `total_len` and returns the bytes.
fn patch_fl(mut bytes: Vec<u8>, total_len: usize) -> Vec<u8> {
    let fl_text = format!("{total_len:012}");
    bytes[FL_POS..FL_POS + 12].copy_from_slice(fl_text.as_bytes());
    bytes
}

/// A minimal Image Subheader: one uncompressed (`NC`) band, no TREs.
fn subheader_bytes(nrows: usize, ncols: usize) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(b"IM"); // IM
    b.extend_from_slice(&[b' '; 10]); // IID1
    b.extend_from_slice(b"20260101000000"); // IDATIM
    b.extend_from_slice(&[b' '; 17]); // TGTID
    b.extend_from_slice(&[b' '; 80]); // IID2
    b.push(b'U'); // ISCLAS
    b.extend_from_slice(&[b' '; 2]); // ISCLSY
    b.extend_from_slice(&[b' '; 11]); // ISCODE
    b.extend_from_slice(&[b' '; 2]); // ISCTLH
    b.extend_from_slice(&[b' '; 20]); // ISREL
    b.extend_from_slice(&[b' '; 2]); // ISDCTP
    b.extend_from_slice(&[b' '; 8]); // ISDCDT
    b.extend_from_slice(&[b' '; 4]); // ISDCXM
    b.extend_from_slice(&[b' '; 1]); // ISDG
    b.extend_from_slice(&[b' '; 8]); // ISDGDT
    b.extend_from_slice(&[b' '; 43]); // ISCLTX
    b.extend_from_slice(&[b' '; 1]); // ISCATP
    b.extend_from_slice(&[b' '; 40]); // ISCAUT
    b.extend_from_slice(&[b' '; 1]); // ISCRSN
    b.extend_from_slice(&[b' '; 8]); // ISSRDT
    b.extend_from_slice(&[b' '; 15]); // ISCTLN
    b.push(b'0'); // ENCRYP
    b.extend_from_slice(&[b' '; 42]); // ISORCE
    b.extend_from_slice(format!("{nrows:08}").as_bytes()); // NROWS
    b.extend_from_slice(format!("{ncols:08}").as_bytes()); // NCOLS
    b.extend_from_slice(b"INT"); // PVTYPE
    b.extend_from_slice(b"MONO    "); // IREP
    b.extend_from_slice(b"VIS     "); // ICAT
    b.extend_from_slice(b"08"); // ABPP
    b.push(b'R'); // PJUST
    b.push(b'G'); // ICORDS
    b.extend_from_slice(&[b' '; 60]); // IGEOLO
    b.extend_from_slice(b"0"); // NICOM
    b.extend_from_slice(b"NC"); // IC (no COMRAT)
    b.extend_from_slice(b"1"); // NBANDS
    b.extend_from_slice(b"M "); // IREPBAND_1
    b.extend_from_slice(&[b' '; 6]); // ISUBCAT_1
    b.push(b'N'); // IFC_1
    b.extend_from_slice(&[b' '; 3]); // IMFLT_1
    b.extend_from_slice(b"0"); // NLUTS_1
    b.extend_from_slice(b"0"); // ISYNC
    b.push(b'B'); // IMODE
    b.extend_from_slice(b"0001"); // NBPR
    b.extend_from_slice(b"0001"); // NBPC
    b.extend_from_slice(format!("{ncols:04}").as_bytes()); // NPPBH
    b.extend_from_slice(format!("{nrows:04}").as_bytes()); // NPPBV
    b.extend_from_slice(b"08"); // NBPP
    b.extend_from_slice(b"000"); // IDLVL
    b.extend_from_slice(b"000"); // IALVL
    b.extend_from_slice(&[b' '; 10]); // ILOC
    b.extend_from_slice(b"1.0 "); // IMAG
    b.extend_from_slice(b"00000"); // UDIDL
    b.extend_from_slice(b"00000"); // IXSHDL
    b
}

#[test]
fn s1_minimum_valid_header_has_no_image_segments() {
    logger();
    let bytes = file_header_bytes(&[]);
    let len = bytes.len();
    let bytes = patch_fl(bytes, len);

    let container = load_nitf_bytes(&bytes, &Options::default()).unwrap();
    assert!(container.image_segments.is_empty());
}

#[test]
fn s2_one_uncompressed_image_bypasses_codec_registry() {
    logger();
    let subheader = subheader_bytes(10, 10);
    let data = vec![0x42u8; 100]; // 10x10x1 band, 8bpp

    let mut bytes = file_header_bytes(&[(subheader.len(), data.len())]);
    bytes.extend_from_slice(&subheader);
    bytes.extend_from_slice(&data);
    let len = bytes.len();
    let bytes = patch_fl(bytes, len);

    let container = load_nitf_bytes(&bytes, &Options::default()).unwrap();
    assert_eq!(container.image_segments.len(), 1);

    // NC is uncompressed: `get_image` succeeds with no codec registered.
    let pixels = container.get_image(0).unwrap();
    assert_eq!(pixels.rows, 10);
    assert_eq!(pixels.cols, 10);
    assert_eq!(pixels.bands, 1);
    assert_eq!(pixels.data, data);
}

#[test]
fn s3_fl_mismatch_is_fatal_under_strict_default() {
    logger();
    let bytes = file_header_bytes(&[]);
    let len = bytes.len();
    let bytes = patch_fl(bytes, len + 100);

    let err = load_nitf_bytes(&bytes, &Options::default()).unwrap_err();
    assert!(matches!(err, NitfError::FileLengthMismatch { .. }));
}

#[test]
fn s3_fl_mismatch_is_non_fatal_when_strict_check_disabled() {
    logger();
    let bytes = file_header_bytes(&[]);
    let len = bytes.len();
    let bytes = patch_fl(bytes, len + 100);

    let options = Options {
        strict_length_check: false,
        ..Options::default()
    };
    let container = load_nitf_bytes(&bytes, &options).unwrap();
    assert!(container.image_segments.is_empty());
}

#[test]
fn get_image_on_out_of_range_segment_index_errors() {
    logger();
    let bytes = file_header_bytes(&[]);
    let len = bytes.len();
    let bytes = patch_fl(bytes, len);

    let container = load_nitf_bytes(&bytes, &Options::default()).unwrap();
    assert!(container.get_image(0).is_err());
}
