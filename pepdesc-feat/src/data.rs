//! Built-in reference data.
//!
//! All per-amino-acid vectors are indexed by `pepdesc_seq::aa_index`, i.e.
//! alphabetical order `ACDEFGHIKLMNPQRSTVWY`. Larger tables (the full
//! AAIndex1 database, AAIndex2/3 matrix sets) are not embedded; they are
//! loaded from CSV through the types in [`crate::tables`].

/// The eight canonical AAIndex1 indices used by the autocorrelation
/// descriptors (Xiao et al., 2015): hydrophobicity, flexibility,
/// polarizability, free energy of solution, accessible surface area,
/// residue volume, steric parameter, relative mutability.
pub(crate) const AUTOCORR_PROPERTIES: [(&str, [f64; 20]); 8] = [
    (
        "CIDH920105",
        [
            0.02, 0.77, -1.04, -1.14, 1.35, -0.80, 0.26, 1.81, -0.41, 1.14, 1.00, -0.77, -0.09,
            -1.10, -0.42, -0.97, -0.77, 1.13, 1.71, 1.11,
        ],
    ),
    (
        "BHAR880101",
        [
            0.357, 0.346, 0.511, 0.497, 0.314, 0.544, 0.323, 0.462, 0.466, 0.365, 0.295, 0.463,
            0.509, 0.493, 0.529, 0.507, 0.444, 0.386, 0.305, 0.420,
        ],
    ),
    (
        "CHAM820101",
        [
            0.046, 0.128, 0.105, 0.151, 0.290, 0.000, 0.230, 0.186, 0.219, 0.186, 0.221, 0.134,
            0.131, 0.180, 0.291, 0.062, 0.108, 0.140, 0.409, 0.298,
        ],
    ),
    (
        "CHAM820102",
        [
            -0.368, 4.530, 2.060, 1.770, 1.060, -0.525, 0.000, 0.791, 0.000, 1.070, 0.656, 0.000,
            -2.240, 0.731, -1.030, -0.524, 0.000, 0.401, 1.600, 4.910,
        ],
    ),
    (
        "CHOC760101",
        [
            115.0, 135.0, 150.0, 190.0, 210.0, 75.0, 195.0, 175.0, 200.0, 170.0, 185.0, 160.0,
            145.0, 180.0, 225.0, 115.0, 140.0, 155.0, 255.0, 230.0,
        ],
    ),
    (
        "BIGC670101",
        [
            52.6, 68.3, 68.4, 84.7, 113.9, 36.3, 91.9, 102.0, 105.1, 102.0, 97.7, 75.7, 73.6,
            89.7, 109.1, 54.9, 71.2, 85.1, 135.4, 116.2,
        ],
    ),
    (
        "CHAM810101",
        [
            0.52, 0.62, 0.76, 0.68, 0.70, 0.00, 0.70, 1.02, 0.68, 0.98, 0.78, 0.76, 0.36, 0.68,
            0.68, 0.53, 0.50, 0.76, 0.70, 0.70,
        ],
    ),
    (
        "DAYM780201",
        [
            100.0, 20.0, 106.0, 102.0, 41.0, 49.0, 66.0, 96.0, 56.0, 40.0, 94.0, 134.0, 56.0,
            93.0, 65.0, 120.0, 97.0, 74.0, 18.0, 41.0,
        ],
    ),
];

/// The three PAAC properties (Chou, 2001): Tanford hydrophobicity,
/// Hopp-Woods hydrophilicity, and side-chain mass.
pub(crate) const PAAC_PROPERTIES: [(&str, [f64; 20]); 3] = [
    (
        "hydrophobicity",
        [
            0.62, 0.29, -0.90, -0.74, 1.19, 0.48, -0.40, 1.38, -1.50, 1.06, 0.64, -0.78, 0.12,
            -0.85, -2.53, -0.18, -0.05, 1.08, 0.81, 0.26,
        ],
    ),
    (
        "hydrophilicity",
        [
            -0.5, -1.0, 3.0, 3.0, -2.5, 0.0, -0.5, -1.8, 3.0, -1.8, -1.3, 0.2, 0.0, 0.2, 3.0,
            0.3, -0.4, -1.5, -3.4, -2.3,
        ],
    ),
    (
        "side_chain_mass",
        [
            15.0, 47.0, 59.0, 73.0, 91.0, 1.0, 82.0, 57.0, 73.0, 57.0, 75.0, 58.0, 42.0, 72.0,
            101.0, 31.0, 45.0, 43.0, 130.0, 107.0,
        ],
    ),
];

/// Grantham (1974) amino-acid distance matrix, symmetric, zero diagonal.
pub(crate) const GRANTHAM: [[f64; 20]; 20] = [
    [0.0, 195.0, 126.0, 107.0, 113.0, 60.0, 86.0, 94.0, 106.0, 96.0, 84.0, 111.0, 27.0, 91.0, 112.0, 99.0, 58.0, 64.0, 148.0, 112.0], // A
    [195.0, 0.0, 154.0, 170.0, 205.0, 159.0, 174.0, 198.0, 202.0, 198.0, 196.0, 139.0, 169.0, 154.0, 180.0, 112.0, 149.0, 192.0, 215.0, 194.0], // C
    [126.0, 154.0, 0.0, 45.0, 177.0, 94.0, 81.0, 168.0, 101.0, 172.0, 160.0, 23.0, 108.0, 61.0, 96.0, 65.0, 85.0, 152.0, 181.0, 160.0], // D
    [107.0, 170.0, 45.0, 0.0, 140.0, 98.0, 40.0, 134.0, 56.0, 138.0, 126.0, 42.0, 93.0, 29.0, 54.0, 80.0, 65.0, 121.0, 152.0, 122.0], // E
    [113.0, 205.0, 177.0, 140.0, 0.0, 153.0, 100.0, 21.0, 102.0, 22.0, 28.0, 158.0, 114.0, 116.0, 97.0, 155.0, 103.0, 50.0, 40.0, 22.0], // F
    [60.0, 159.0, 94.0, 98.0, 153.0, 0.0, 98.0, 135.0, 127.0, 138.0, 127.0, 80.0, 42.0, 87.0, 125.0, 56.0, 59.0, 109.0, 184.0, 147.0], // G
    [86.0, 174.0, 81.0, 40.0, 100.0, 98.0, 0.0, 94.0, 32.0, 99.0, 87.0, 68.0, 77.0, 24.0, 29.0, 89.0, 47.0, 84.0, 115.0, 83.0], // H
    [94.0, 198.0, 168.0, 134.0, 21.0, 135.0, 94.0, 0.0, 102.0, 5.0, 10.0, 149.0, 95.0, 109.0, 97.0, 142.0, 89.0, 29.0, 61.0, 33.0], // I
    [106.0, 202.0, 101.0, 56.0, 102.0, 127.0, 32.0, 102.0, 0.0, 107.0, 95.0, 94.0, 103.0, 53.0, 26.0, 121.0, 78.0, 97.0, 110.0, 85.0], // K
    [96.0, 198.0, 172.0, 138.0, 22.0, 138.0, 99.0, 5.0, 107.0, 0.0, 15.0, 153.0, 98.0, 113.0, 102.0, 145.0, 92.0, 32.0, 61.0, 36.0], // L
    [84.0, 196.0, 160.0, 126.0, 28.0, 127.0, 87.0, 10.0, 95.0, 15.0, 0.0, 142.0, 87.0, 101.0, 91.0, 135.0, 81.0, 21.0, 67.0, 36.0], // M
    [111.0, 139.0, 23.0, 42.0, 158.0, 80.0, 68.0, 149.0, 94.0, 153.0, 142.0, 0.0, 91.0, 46.0, 86.0, 46.0, 65.0, 133.0, 174.0, 143.0], // N
    [27.0, 169.0, 108.0, 93.0, 114.0, 42.0, 77.0, 95.0, 103.0, 98.0, 87.0, 91.0, 0.0, 76.0, 103.0, 74.0, 38.0, 68.0, 147.0, 110.0], // P
    [91.0, 154.0, 61.0, 29.0, 116.0, 87.0, 24.0, 109.0, 53.0, 113.0, 101.0, 46.0, 76.0, 0.0, 43.0, 68.0, 42.0, 96.0, 130.0, 99.0], // Q
    [112.0, 180.0, 96.0, 54.0, 97.0, 125.0, 29.0, 97.0, 26.0, 102.0, 91.0, 86.0, 103.0, 43.0, 0.0, 110.0, 71.0, 96.0, 101.0, 77.0], // R
    [99.0, 112.0, 65.0, 80.0, 155.0, 56.0, 89.0, 142.0, 121.0, 145.0, 135.0, 46.0, 74.0, 68.0, 110.0, 0.0, 58.0, 124.0, 177.0, 144.0], // S
    [58.0, 149.0, 85.0, 65.0, 103.0, 59.0, 47.0, 89.0, 78.0, 92.0, 81.0, 65.0, 38.0, 42.0, 71.0, 58.0, 0.0, 69.0, 128.0, 92.0], // T
    [64.0, 192.0, 152.0, 121.0, 50.0, 109.0, 84.0, 29.0, 97.0, 32.0, 21.0, 133.0, 68.0, 96.0, 96.0, 124.0, 69.0, 0.0, 88.0, 55.0], // V
    [148.0, 215.0, 181.0, 152.0, 40.0, 184.0, 115.0, 61.0, 110.0, 61.0, 67.0, 174.0, 147.0, 130.0, 101.0, 177.0, 128.0, 88.0, 0.0, 37.0], // W
    [112.0, 194.0, 160.0, 122.0, 22.0, 147.0, 83.0, 33.0, 85.0, 36.0, 36.0, 143.0, 110.0, 99.0, 77.0, 144.0, 92.0, 55.0, 37.0, 0.0], // Y
];

/// The 13 CTD properties, each partitioning the 20 amino acids into three
/// disjoint groups (Li et al. / Dubchak et al. grouping).
pub(crate) const CTD_GROUPS: [(&str, &str, &str, &str); 13] = [
    ("hydrophobicity_PRAM900101", "RKEDQN", "GASTPHY", "CLVIMFW"),
    ("hydrophobicity_ARGP820101", "QSTNGDE", "RAHCKMV", "LYPFIW"),
    ("hydrophobicity_ZIMJ680101", "QNGSWTDERA", "HMCKV", "LPFYI"),
    ("hydrophobicity_PONP930101", "KPDESNQT", "GRHA", "YMFWLCVI"),
    ("hydrophobicity_CASG920101", "KDEQPSRNTG", "AHYMLV", "FIWC"),
    ("hydrophobicity_ENGD860101", "RDKENQHYP", "SGTAW", "CVLIMF"),
    ("hydrophobicity_FASG890101", "KERSQD", "NTPG", "AYHWVMFLIC"),
    ("normwaalsvolume", "GASTPDC", "NVEQIL", "MHKFRYW"),
    ("polarity", "LIFWCMVY", "PATGS", "HQRKNED"),
    ("polarizability", "GASDT", "CPNVEQIL", "KMHFRYW"),
    ("charge", "KR", "ANCQGHILMFPSTWYV", "DE"),
    ("secondarystruct", "EALMQKRH", "VIYCWFT", "GNPSD"),
    ("solventaccess", "ALFCGIVW", "RKQEND", "MPSTHY"),
];

/// Conjoint-triad classes (Shen et al., 2007): dipole/volume grouping of the
/// 20 amino acids into 7 classes, as class strings in class order 1..7.
pub(crate) const TRIAD_CLASSES: [&str; 7] = ["AGV", "ILFP", "YMTS", "HNQW", "RK", "DE", "C"];
