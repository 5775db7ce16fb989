//! Pregenerated lunisolar data for 1900–2100, China Standard Time (UTC+8).
//!
//! Both tables were computed offline from truncated-VSOP87 solar longitudes
//! and Meeus new-moon series, then checked against published New-Year and
//! solar-term dates. Month structure follows the civil rule: the month
//! containing the winter solstice is month 11, and in a 13-month year the
//! first month after it without a major term becomes the leap month.

/// First Gregorian year covered by the tables.
pub(crate) const FIRST_YEAR: i32 = 1900;
/// Last Gregorian year covered by the tables.
pub(crate) const LAST_YEAR: i32 = 2100;

/// One packed word per lunar year `FIRST_YEAR..=LAST_YEAR`.
///
/// Bit layout, low to high:
/// - bits 0..4: leap-month ordinal (0 = no leap month),
/// - bits 4..17: thirteen month-length flags, slot 0 at bit 16 (set = 30
///   days); slot 12 is meaningful only in leap years,
/// - bits 17..22: offset of Chinese New Year from January 21 of the same
///   Gregorian year, in days.
pub(crate) const LUNAR_YEARS: [u32; 201] = [
    0x1496D8, 0x3A95C0, 0x254AE0, 0x10A4D5, 0x35A4C0, 0x1DB2A0, 0x08D554, 0x2EAD40,
    0x1935A0, 0x0295D2, 0x2895C0, 0x1349B6, 0x3949A0, 0x21A4A0, 0x0BAA95, 0x316AA0,
    0x1CAD40, 0x052DA2, 0x2B2B60, 0x169377, 0x3C9360, 0x254960, 0x0F64B5, 0x34D4A0,
    0x1EDA80, 0x075B54, 0x2E56C0, 0x192AE0, 0x0492F2, 0x2892E0, 0x12C966, 0x37A940,
    0x21D4A0, 0x0ADA95, 0x30B5A0, 0x1C56C0, 0x0726E3, 0x2B25C0, 0x1592D7, 0x3B92A0,
    0x25A940, 0x0DB4A6, 0x336AA0, 0x1EAD40, 0x0955B4, 0x2E4BA0, 0x1925A0, 0x0392B2,
    0x2952A0, 0x116957, 0x36D940, 0x216AA0, 0x0CAB55, 0x309B40, 0x1B4B60, 0x06A573,
    0x2CA560, 0x1552A8, 0x39D2A0, 0x24D540, 0x0F5AA6, 0x3356A0, 0x1E96C0, 0x094AE4,
    0x2F4AE0, 0x18A4C0, 0x01D263, 0x27B2A0, 0x12B557, 0x36AD40, 0x212DA0, 0x0C95D5,
    0x3295A0, 0x1B49A0, 0x05A4D4, 0x2BA4A0, 0x15AA58, 0x396A80, 0x236D40, 0x0F2DA6,
    0x352B60, 0x1E9360, 0x094974, 0x2F4960, 0x1964BA, 0x3CD4A0, 0x26DA80, 0x115B46,
    0x3756C0, 0x212AE0, 0x0C92F5, 0x3292E0, 0x1CC960, 0x04D4A3, 0x29D4A0, 0x14D658,
    0x3AB580, 0x2356C0, 0x0F26D5, 0x3525C0, 0x1F92C0, 0x07A954, 0x2DA940, 0x17B4A0,
    0x02B552, 0x26AD40, 0x1155B7, 0x384BA0, 0x2325A0, 0x0B92B5, 0x3152A0, 0x1B6940,
    0x056AA4, 0x295AA0, 0x14AB59, 0x3A9740, 0x254B60, 0x0EA576, 0x34A560, 0x1F5260,
    0x08E954, 0x2CD540, 0x175AA0, 0x029B52, 0x2896C0, 0x114AE6, 0x3749C0, 0x21A4C0,
    0x0BD265, 0x2FAA60, 0x1AB540, 0x04D6A3, 0x2B2DA0, 0x1495DB, 0x3A95A0, 0x2549A0,
    0x0FA4B6, 0x33A4A0, 0x1DAA40, 0x07B545, 0x2D6B40, 0x16ADA0, 0x0295B2, 0x289360,
    0x134977, 0x374960, 0x2154A0, 0x0B6A55, 0x30DA40, 0x195B40, 0x04AB63, 0x2B26E0,
    0x1692F8, 0x3A92E0, 0x24C960, 0x0ED4A6, 0x33D4A0, 0x1CD540, 0x0756C4, 0x2D55C0,
    0x1925C0, 0x0192E3, 0x2792C0, 0x11A957, 0x37A940, 0x1FB4A0, 0x0AB555, 0x30AD40,
    0x1B4DA0, 0x04A5D4, 0x2AA5A0, 0x1552B8, 0x3B52A0, 0x236940, 0x0D6AA6, 0x335AA0,
    0x1EAB40, 0x074BA4, 0x2D4B60, 0x18A560, 0x035273, 0x26D260, 0x10E537, 0x36D540,
    0x215AA0, 0x0A9B55, 0x3096C0, 0x1B4AE0, 0x06A4E4, 0x29A2C0, 0x13D268, 0x39AA40,
    0x23B540, 0x0CD6A6, 0x32ADA0, 0x1E95C0, 0x0949D4, 0x2D45A0, 0x17A2A0, 0x01B252,
    0x27AA40,
];

/// Day-of-month of the 24 solar terms per Gregorian year, in calendar order
/// starting with the two January terms (小寒, 大寒) and ending with the two
/// December terms (大雪, 冬至). Term `k` falls in month `k / 2 + 1`.
pub(crate) const SOLAR_TERM_DAYS: [[u8; 24]; 201] = [
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1900
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1901
    [ 6, 21,  5, 19,  6, 21,  6, 21,  6, 22,  7, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 23], // 1902
    [ 6, 21,  5, 20,  7, 22,  6, 21,  7, 22,  7, 22,  8, 24,  9, 24,  9, 24,  9, 24,  8, 23,  8, 23], // 1903
    [ 7, 21,  5, 20,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1904
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1905
    [ 6, 21,  5, 19,  6, 21,  6, 21,  6, 22,  6, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 23], // 1906
    [ 6, 21,  5, 20,  7, 22,  6, 21,  7, 22,  7, 22,  8, 24,  9, 24,  9, 24,  9, 24,  8, 23,  8, 23], // 1907
    [ 7, 21,  5, 20,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1908
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1909
    [ 6, 21,  5, 19,  6, 21,  6, 21,  6, 22,  6, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 23], // 1910
    [ 6, 21,  5, 20,  7, 22,  6, 21,  7, 22,  7, 22,  8, 24,  9, 24,  9, 24,  9, 24,  8, 23,  8, 23], // 1911
    [ 7, 21,  5, 20,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 22,  7, 22], // 1912
    [ 6, 20,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 23,  9, 24,  8, 23,  8, 22], // 1913
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 23], // 1914
    [ 6, 21,  5, 20,  6, 22,  6, 21,  6, 22,  7, 22,  8, 24,  8, 24,  9, 24,  9, 24,  8, 23,  8, 23], // 1915
    [ 6, 21,  5, 20,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 1916
    [ 6, 20,  4, 19,  6, 21,  5, 21,  6, 21,  6, 22,  8, 23,  8, 24,  8, 23,  9, 24,  8, 23,  8, 22], // 1917
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1918
    [ 6, 21,  5, 20,  6, 22,  6, 21,  6, 22,  7, 22,  8, 24,  8, 24,  9, 24,  9, 24,  8, 23,  8, 23], // 1919
    [ 6, 21,  5, 20,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 1920
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  8, 23,  8, 24,  8, 23,  9, 24,  8, 23,  7, 22], // 1921
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1922
    [ 6, 21,  5, 19,  6, 21,  6, 21,  6, 22,  7, 22,  8, 24,  8, 24,  9, 24,  9, 24,  8, 23,  8, 23], // 1923
    [ 6, 21,  5, 20,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 1924
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  8, 23,  8, 24,  8, 23,  9, 24,  8, 23,  7, 22], // 1925
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1926
    [ 6, 21,  5, 19,  6, 21,  6, 21,  6, 22,  7, 22,  8, 24,  8, 24,  9, 24,  9, 24,  8, 23,  8, 23], // 1927
    [ 6, 21,  5, 20,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1928
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1929
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1930
    [ 6, 21,  5, 19,  6, 21,  6, 21,  6, 22,  7, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 23], // 1931
    [ 6, 21,  5, 20,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1932
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1933
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1934
    [ 6, 21,  5, 19,  6, 21,  6, 21,  6, 22,  6, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 23], // 1935
    [ 6, 21,  5, 20,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1936
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1937
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1938
    [ 6, 21,  5, 19,  6, 21,  6, 21,  6, 22,  6, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 23], // 1939
    [ 6, 21,  5, 20,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1940
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1941
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1942
    [ 6, 21,  5, 19,  6, 21,  6, 21,  6, 22,  6, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 23], // 1943
    [ 6, 21,  5, 20,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1944
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 1945
    [ 6, 20,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 23,  9, 24,  8, 23,  8, 22], // 1946
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 23], // 1947
    [ 6, 21,  5, 20,  5, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1948
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 1949
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  8, 23,  8, 24,  8, 23,  9, 24,  8, 23,  8, 22], // 1950
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 24,  8, 24,  8, 24,  9, 24,  8, 23,  8, 23], // 1951
    [ 6, 21,  5, 20,  5, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1952
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 1953
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  8, 23,  8, 24,  8, 23,  9, 24,  8, 23,  7, 22], // 1954
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1955
    [ 6, 21,  5, 20,  5, 20,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1956
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 1957
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1958
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1959
    [ 6, 21,  5, 19,  5, 20,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 1960
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1961
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1962
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1963
    [ 6, 21,  5, 19,  5, 20,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 1964
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1965
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1966
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1967
    [ 6, 21,  5, 19,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 1968
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1969
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1970
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 24,  9, 24,  8, 23,  8, 22], // 1971
    [ 6, 21,  5, 19,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 1972
    [ 5, 20,  4, 19,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1973
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1974
    [ 6, 21,  4, 19,  6, 21,  5, 21,  6, 22,  6, 22,  8, 23,  8, 24,  8, 23,  9, 24,  8, 23,  8, 22], // 1975
    [ 6, 21,  5, 19,  5, 20,  4, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 1976
    [ 5, 20,  4, 19,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1977
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 23,  7, 22], // 1978
    [ 6, 20,  4, 19,  6, 21,  5, 21,  6, 21,  6, 22,  8, 23,  8, 24,  8, 23,  9, 24,  8, 23,  8, 22], // 1979
    [ 6, 21,  5, 19,  5, 20,  4, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 1980
    [ 5, 20,  4, 19,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1981
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 1982
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  8, 23,  8, 24,  8, 23,  9, 24,  8, 23,  8, 22], // 1983
    [ 6, 21,  4, 19,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 1984
    [ 5, 20,  4, 19,  5, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1985
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 1986
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 24,  8, 23,  9, 24,  8, 23,  7, 22], // 1987
    [ 6, 21,  4, 19,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 1988
    [ 5, 20,  4, 19,  5, 20,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 1989
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 1990
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1991
    [ 6, 21,  4, 19,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 1992
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 1993
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1994
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1995
    [ 6, 21,  4, 19,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 1996
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 1997
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 1998
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 1999
    [ 6, 21,  4, 19,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2000
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2001
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2002
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 2003
    [ 6, 21,  4, 19,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2004
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2005
    [ 5, 20,  4, 19,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2006
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  9, 24,  8, 23,  7, 22], // 2007
    [ 6, 21,  4, 19,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 22,  8, 23,  7, 22,  7, 21], // 2008
    [ 5, 20,  4, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2009
    [ 5, 20,  4, 19,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2010
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 23,  7, 22], // 2011
    [ 6, 21,  4, 19,  5, 20,  4, 20,  5, 20,  5, 21,  7, 22,  7, 23,  7, 22,  8, 23,  7, 22,  7, 21], // 2012
    [ 5, 20,  4, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2013
    [ 5, 20,  4, 19,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2014
    [ 6, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 22,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 2015
    [ 6, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 21,  7, 22,  7, 23,  7, 22,  8, 23,  7, 22,  7, 21], // 2016
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2017
    [ 5, 20,  4, 19,  5, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2018
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 2019
    [ 6, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  7, 21], // 2020
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2021
    [ 5, 20,  4, 19,  5, 20,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2022
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 24,  8, 22,  7, 22], // 2023
    [ 6, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2024
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2025
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2026
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2027
    [ 6, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2028
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2029
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2030
    [ 5, 20,  4, 19,  6, 21,  5, 20,  6, 21,  6, 21,  7, 23,  8, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2031
    [ 6, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2032
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2033
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2034
    [ 5, 20,  4, 19,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2035
    [ 6, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2036
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2037
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2038
    [ 5, 20,  4, 19,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2039
    [ 6, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2040
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 20,  5, 21,  7, 22,  7, 23,  7, 22,  8, 23,  7, 22,  7, 21], // 2041
    [ 5, 20,  4, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2042
    [ 5, 20,  4, 19,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2043
    [ 6, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  7, 23,  7, 22,  6, 21], // 2044
    [ 5, 20,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  7, 22,  7, 23,  7, 22,  8, 23,  7, 22,  7, 21], // 2045
    [ 5, 20,  4, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2046
    [ 5, 20,  4, 19,  6, 21,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  8, 23,  8, 23,  7, 22,  7, 22], // 2047
    [ 6, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 20,  6, 22,  7, 22,  7, 22,  7, 23,  7, 21,  6, 21], // 2048
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  7, 21], // 2049
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2050
    [ 5, 20,  4, 19,  5, 20,  5, 20,  5, 21,  6, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2051
    [ 5, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 20,  6, 22,  7, 22,  7, 22,  7, 23,  7, 21,  6, 21], // 2052
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  7, 21], // 2053
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2054
    [ 5, 20,  4, 19,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2055
    [ 5, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 20,  6, 22,  7, 22,  7, 22,  7, 23,  7, 21,  6, 21], // 2056
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2057
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2058
    [ 5, 20,  4, 19,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2059
    [ 5, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 20,  6, 22,  7, 22,  7, 22,  7, 22,  6, 21,  6, 21], // 2060
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2061
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2062
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2063
    [ 5, 20,  4, 19,  5, 20,  4, 19,  5, 20,  5, 20,  6, 22,  7, 22,  7, 22,  7, 22,  6, 21,  6, 21], // 2064
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2065
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2066
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2067
    [ 5, 20,  4, 19,  5, 20,  4, 19,  4, 20,  5, 20,  6, 22,  6, 22,  7, 22,  7, 22,  6, 21,  6, 21], // 2068
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2069
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 20,  5, 21,  7, 22,  7, 23,  7, 22,  8, 23,  7, 22,  7, 21], // 2070
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2071
    [ 5, 20,  4, 19,  5, 20,  4, 19,  4, 20,  5, 20,  6, 22,  6, 22,  7, 22,  7, 22,  6, 21,  6, 21], // 2072
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  7, 23,  7, 22,  6, 21], // 2073
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 20,  5, 21,  7, 22,  7, 23,  7, 22,  8, 23,  7, 22,  7, 21], // 2074
    [ 5, 20,  4, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2075
    [ 5, 20,  4, 19,  5, 20,  4, 19,  4, 20,  5, 20,  6, 22,  6, 22,  7, 22,  7, 22,  6, 21,  6, 21], // 2076
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  7, 23,  7, 22,  6, 21], // 2077
    [ 5, 20,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 23,  7, 22,  8, 23,  7, 22,  7, 21], // 2078
    [ 5, 20,  4, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2079
    [ 5, 20,  4, 19,  5, 20,  4, 19,  4, 20,  5, 20,  6, 22,  6, 22,  7, 22,  7, 22,  6, 21,  6, 21], // 2080
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 20,  6, 22,  7, 22,  7, 22,  7, 23,  7, 21,  6, 21], // 2081
    [ 5, 20,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  7, 21], // 2082
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2083
    [ 5, 20,  4, 19,  4, 19,  4, 19,  4, 20,  5, 20,  6, 22,  6, 22,  6, 22,  7, 22,  6, 21,  6, 21], // 2084
    [ 4, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 20,  6, 22,  7, 22,  7, 22,  7, 23,  7, 21,  6, 21], // 2085
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  7, 21], // 2086
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2087
    [ 5, 20,  4, 19,  4, 19,  4, 19,  4, 20,  4, 20,  6, 22,  6, 22,  6, 22,  7, 22,  6, 21,  6, 21], // 2088
    [ 4, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 20,  6, 22,  7, 22,  7, 22,  7, 23,  7, 21,  6, 21], // 2089
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2090
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2091
    [ 5, 20,  4, 19,  4, 19,  4, 19,  4, 20,  4, 20,  6, 22,  6, 22,  6, 22,  7, 22,  6, 21,  6, 21], // 2092
    [ 4, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 20,  6, 22,  7, 22,  7, 22,  7, 22,  6, 21,  6, 21], // 2093
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2094
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2095
    [ 5, 20,  4, 18,  4, 19,  4, 19,  4, 20,  4, 20,  6, 22,  6, 22,  6, 22,  7, 22,  6, 21,  6, 21], // 2096
    [ 4, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 20,  6, 22,  6, 22,  7, 22,  7, 22,  6, 21,  6, 21], // 2097
    [ 5, 19,  3, 18,  5, 20,  4, 19,  5, 20,  5, 21,  6, 22,  7, 22,  7, 22,  8, 23,  7, 22,  6, 21], // 2098
    [ 5, 20,  3, 18,  5, 20,  4, 20,  5, 21,  5, 21,  7, 22,  7, 23,  7, 23,  8, 23,  7, 22,  7, 21], // 2099
    [ 5, 20,  4, 18,  5, 20,  5, 20,  5, 21,  5, 21,  7, 23,  7, 23,  7, 23,  8, 23,  7, 22,  7, 22], // 2100
];

/// Decoded view of one [`LUNAR_YEARS`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YearRow {
    /// Days from January 21 to Chinese New Year.
    pub new_year_offset: u8,
    /// Month-length flags, slot 0 at bit 12.
    pub month_bits: u16,
    /// Leap-month ordinal, 0 when the year has no leap month.
    pub leap_month: u8,
}

impl YearRow {
    pub fn month_count(&self) -> usize {
        if self.leap_month == 0 {
            12
        } else {
            13
        }
    }

    /// Length in days of month slot `slot` (0-based position in the year's
    /// month sequence, leap month included).
    pub fn month_len(&self, slot: usize) -> i64 {
        debug_assert!(slot < self.month_count());
        29 + ((self.month_bits >> (12 - slot)) & 1) as i64
    }

    pub fn days_in_year(&self) -> i64 {
        (0..self.month_count()).map(|s| self.month_len(s)).sum()
    }
}

pub(crate) fn year_row(year: i32) -> Option<YearRow> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return None;
    }
    let v = LUNAR_YEARS[(year - FIRST_YEAR) as usize];
    Some(YearRow {
        new_year_offset: ((v >> 17) & 0x1F) as u8,
        month_bits: ((v >> 4) & 0x1FFF) as u16,
        leap_month: (v & 0xF) as u8,
    })
}

/// Day-of-month of solar term `index` (0 = 小寒 … 23 = 冬至) in `year`.
pub(crate) fn term_day(year: i32, index: usize) -> Option<u8> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) || index >= 24 {
        return None;
    }
    Some(SOLAR_TERM_DAYS[(year - FIRST_YEAR) as usize][index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::solar::SolarDay;

    fn new_year(year: i32) -> SolarDay {
        let row = year_row(year).unwrap();
        SolarDay::from_ymd(year, 1, 21).unwrap() + row.new_year_offset as i64
    }

    #[test]
    fn new_year_anchors() {
        let anchors = [
            (1900, 1, 31),
            (1984, 2, 2),
            (1990, 1, 27),
            (2000, 2, 5),
            (2020, 1, 25),
            (2024, 2, 10),
            (2025, 1, 29),
            (2026, 2, 17),
            (2033, 1, 31),
            (2050, 1, 23),
            (2100, 2, 9),
        ];
        for (y, m, d) in anchors {
            assert_eq!(new_year(y), SolarDay::from_ymd(y, m, d).unwrap(), "new year {y}");
        }
    }

    #[test]
    fn leap_month_anchors() {
        let anchors = [
            (1900, 8),
            (1990, 5),
            (2004, 2),
            (2017, 6),
            (2020, 4),
            (2023, 2),
            (2025, 6),
            (2033, 11),
            (2000, 0),
            (2026, 0),
        ];
        for (y, leap) in anchors {
            assert_eq!(year_row(y).unwrap().leap_month, leap, "leap month {y}");
        }
    }

    #[test]
    fn month_lengths_chain_between_new_years() {
        // The months of lunar year Y must span exactly the days up to the
        // next New Year.
        for y in FIRST_YEAR..LAST_YEAR {
            let row = year_row(y).unwrap();
            let span = new_year(y + 1) - new_year(y);
            assert_eq!(row.days_in_year(), span, "year {y}");
        }
    }

    #[test]
    fn month_lengths_are_lunations() {
        for y in FIRST_YEAR..=LAST_YEAR {
            let row = year_row(y).unwrap();
            for s in 0..row.month_count() {
                assert!(matches!(row.month_len(s), 29 | 30), "year {y} slot {s}");
            }
        }
    }

    #[test]
    fn term_days_fall_in_plausible_windows() {
        for y in FIRST_YEAR..=LAST_YEAR {
            for k in 0..24 {
                let d = term_day(y, k).unwrap();
                if k % 2 == 0 {
                    assert!((3..=9).contains(&d), "jie {k} of {y} on day {d}");
                } else {
                    assert!((17..=25).contains(&d), "zhongqi {k} of {y} on day {d}");
                }
            }
        }
    }

    #[test]
    fn known_term_dates() {
        assert_eq!(term_day(2026, 2), Some(4)); // 立春
        assert_eq!(term_day(2021, 2), Some(3));
        assert_eq!(term_day(2024, 6), Some(4)); // 清明
        assert_eq!(term_day(2000, 23), Some(21)); // 冬至
        assert_eq!(term_day(1990, 8), Some(6)); // 立夏
        assert_eq!(term_day(1990, 10), Some(6)); // 芒种
    }

    #[test]
    fn out_of_range_years_have_no_rows() {
        assert!(year_row(1899).is_none());
        assert!(year_row(2101).is_none());
        assert!(term_day(1899, 0).is_none());
        assert!(term_day(2100, 24).is_none());
    }
}
