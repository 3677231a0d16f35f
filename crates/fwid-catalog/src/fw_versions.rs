//! Firmware versions collected from vehicles in the field
//!
//! Append-only: new samples are added to the end of each list.

use fwid_core::{CarModel, EcuFamily, EcuIdentifier};

pub const ENGINE: EcuIdentifier = EcuIdentifier::new(EcuFamily::Engine, 0x7e0, None);
pub const TRANSMISSION: EcuIdentifier = EcuIdentifier::new(EcuFamily::Transmission, 0x7e1, None);
pub const ABS: EcuIdentifier = EcuIdentifier::new(EcuFamily::Abs, 0x7d1, None);
pub const EPS: EcuIdentifier = EcuIdentifier::new(EcuFamily::Eps, 0x7d4, None);
pub const FWD_RADAR: EcuIdentifier = EcuIdentifier::new(EcuFamily::FwdRadar, 0x7d0, None);
pub const FWD_CAMERA: EcuIdentifier = EcuIdentifier::new(EcuFamily::FwdCamera, 0x7c4, None);
pub const CORNER_RADAR: EcuIdentifier = EcuIdentifier::new(EcuFamily::CornerRadar, 0x7b7, None);
pub const ADAS: EcuIdentifier = EcuIdentifier::new(EcuFamily::Adas, 0x730, None);
pub const HVAC: EcuIdentifier = EcuIdentifier::new(EcuFamily::Hvac, 0x7b3, None);

pub(crate) type FwTable = &'static [(EcuIdentifier, &'static [&'static [u8]])];

pub(crate) static FW_VERSIONS: &[(CarModel, FwTable)] = &[
    // =========================================================================
    // CAN
    // =========================================================================
    (
        CarModel::HyundaiSonata,
        &[
            (
                FWD_RADAR,
                &[
                    b"\xf1\x00DN8_ SCC F-CU-      1.00 1.00 99110-L0000         ",
                    b"\xf1\x00DN8_ SCC F-CUP      1.00 1.00 99110-L0000         ",
                    b"\xf1\x00DN8_ SCC F-CUP      1.00 1.02 99110-L1000         ",
                ],
            ),
            (
                ABS,
                &[
                    b"\xf1\x00DN ESC \x01 102\x19\x04\x13 58910-L1300",
                    b"\xf1\x00DN ESC \x03 100 \x08\x01 58910-L0300",
                ],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00DN8 MFC  AT USA LHD 1.00 1.00 99211-L0000 190716",
                    b"\xf1\x00DN8 MFC  AT USA LHD 1.00 1.01 99211-L0000 191016",
                    b"\xf1\x00DN8 MFC  AT USA LHD 1.00 1.02 99211-L1000 190422",
                ],
            ),
            (
                EPS,
                &[
                    b"\xf1\x00DN8 MDPS C 1.00 1.01 56310L0010\x00 4DNAC101",
                    b"\xf1\x00DN8 MDPS C 1,00 1,01 56310L0010\x00 4DNAC101",
                    b"\xf1\x00DN8 MDPS R 1.00 1.00 57700-L0000 4DNAP100",
                ],
            ),
            (ENGINE, &[b"\xf1\x87391162M003", b"\xf1\x87391162M013"]),
            (
                TRANSMISSION,
                &[b"\xf1\x00HT6TA260BLHT6TA800A1TDN8C20KS4\x00\x00\x00\x00\x00\x00"],
            ),
        ],
    ),
    (
        CarModel::HyundaiSonataLf,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00LF__ SCC F-CUP      1.00 1.00 96401-C2200         "],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00LFF LKAS AT USA LHD 1.00 1.01 95740-C1000 E51",
                    b"\xf1\x00LFF LKAS AT USA LHD 1.01 1.02 95740-C1000 E52",
                ],
            ),
            (
                ENGINE,
                &[b"\xf1\x81606D5051\x00\x00\x00\x00\x00\x00\x00\x00"],
            ),
            (
                TRANSMISSION,
                &[b"\xf1\x816T6B4051\x00\x00\xf1\x006T6H0_C2\x00\x006T6B4051\x00\x00TLF0G24NL1\xb0\x9f\xee\xf5"],
            ),
        ],
    ),
    (
        CarModel::HyundaiElantra2021,
        &[
            (
                FWD_RADAR,
                &[
                    b"\xf1\x00CN7_ SCC F-CUP      1.00 1.01 99110-AA000         ",
                    b"\xf1\x00CN7_ SCC FHCUP      1.00 1.01 99110-AA000         ",
                ],
            ),
            (
                EPS,
                &[
                    b"\xf1\x00CN7 MDPS C 1.00 1.06 56310/AA050 4CNDC106",
                    b"\xf1\x00CN7 MDPS C 1.00 1.06 56310/AA070 4CNDC106",
                ],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00CN7 MFC  AT USA LHD 1.00 1.00 99210-AB000 200819",
                    b"\xf1\x00CN7 MFC  AT USA LHD 1.00 1.03 99210-AA000 200819",
                ],
            ),
            (ABS, &[b"\xf1\x00CN ESC \t 101 \x10\x03 58910-AB800"]),
            (ENGINE, &[b"\xf1\x82CNCWD0AMFCXCSFFA", b"\xf1\x82CNCWD0AMFCXCSFFB"]),
            (
                TRANSMISSION,
                &[b"\xf1\x00HT6WA280BLHT6VA640A1CCN0N20NS5\x00\x00\x00\x00\x00\x00"],
            ),
        ],
    ),
    (
        CarModel::HyundaiSantaFe,
        &[
            (
                FWD_RADAR,
                &[
                    b"\xf1\x00TM__ SCC F-CUP      1.00 1.01 99110-S2000         ",
                    b"\xf1\x00TM__ SCC F-CUP      1.00 1.02 99110-S2000         ",
                ],
            ),
            (ABS, &[b"\xf1\x00TM ESC \x02 100\x18\x030 58910-S2600"]),
            (
                EPS,
                &[
                    b"\xf1\x00TM  MDPS C 1.00 1.00 56340-S2000 8409",
                    b"\xf1\x00TM  MDPS C 1.00 1.01 56340-S2000 9129",
                ],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00TM  MFC  AT USA LHD 1.00 1.00 99211-S2000 180409",
                    b"\xf1\x00TM  MFC  AT USA LHD 1.00 1.00 99211-S1010 181207",
                ],
            ),
            (
                ENGINE,
                &[b"\xf1\x81606EA051\x00\x00\x00\x00\x00\x00\x00\x00"],
            ),
            (
                TRANSMISSION,
                &[b"\xf1\x87LDJUEA6010814HG1\x87wwwwwwwv\x88\x88\x88\x88\x88\x88\x88\xf1\x81U833\x00\x00\x00\x00\x00\x00\xf1\x00bcsh8p54  U833\x00\x00\x00\x00\x00\x00TTM4V22US3\x00\x00\x00\x00"],
            ),
        ],
    ),
    (
        CarModel::HyundaiPalisade,
        &[
            (
                FWD_RADAR,
                &[
                    b"\xf1\x00LX2_ SCC FHCUP      1.00 1.04 99110-S8100         ",
                    b"\xf1\x00LX2_ SCC FHCUP      1.00 1.05 99110-S8100         ",
                ],
            ),
            (ABS, &[b"\xf1\x00LX ESC \x01 103\x19\t\x10 58910-S8360"]),
            (
                EPS,
                &[
                    b"\xf1\x00LX2 MDPS C 1,00 1,03 56310-S8020 4LXDC103",
                    b"\xf1\x00LX2 MDPS C 1.00 1.04 56310-S8020 4LXDC104",
                ],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00LX2 MFC  AT USA LHD 1.00 1.07 99211-S8100 220222",
                    b"\xf1\x00LX2 MFC  AT USA LHD 1.00 1.08 99211-S8100 211103",
                ],
            ),
            (
                ENGINE,
                &[b"\xf1\x81640J0051\x00\x00\x00\x00\x00\x00\x00\x00"],
            ),
            (
                TRANSMISSION,
                &[b"\xf1\x00bcsh8p54  U872\x00\x00\x00\x00\x00\x00TON4G38NB1\x96z28"],
            ),
        ],
    ),
    (
        CarModel::HyundaiKona,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00OS__ SCC F-CUP      1.00 1.00 95655-J9200         "],
            ),
            (ABS, &[b"\xf1\x816V5RAK00018.ELF\xf1\x00\x00\x00\x00\x00\x00\x00"]),
            (
                EPS,
                &[b"\xf1\x00OS  MDPS C 1.00 1.05 56310J9030\x00 4OSDC105"],
            ),
            (
                FWD_CAMERA,
                &[b"\xf1\x00OS9 LKAS AT USA LHD 1.00 1.00 95740-J9300 g21"],
            ),
            (ENGINE, &[b"\xf1\x8190604J9000\x00\x00\x00\x00\x00\x00"]),
            (
                TRANSMISSION,
                &[b"\xf1\x816U2VE051\x00\x00\xf1\x006U2V0_C2\x00\x006U2VE051\x00\x00DOS4T16NS3\x00\x00\x00\x00"],
            ),
        ],
    ),
    (
        CarModel::HyundaiKonaEv,
        &[
            (
                FWD_RADAR,
                &[
                    b"\xf1\x00OSev SCC F-CUP      1.00 1.00 99110-K4100         ",
                    b"\xf1\x00OSev SCC F-CUP      1.00 1.01 99110-K4100         ",
                ],
            ),
            (ABS, &[b"\xf1\x00OS IEB \r 105\x18\t\x18 58520-K4000"]),
            (
                EPS,
                &[b"\xf1\x00OS  MDPS C 1.00 1.04 56310K4050\x00 4OEDC104"],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00OSE LKAS AT EUR LHD 1.00 1.00 95740-K4100 W40",
                    b"\xf1\x00OSE LKAS AT USA LHD 1.00 1.00 95740-K4300 W50",
                ],
            ),
        ],
    ),
    (
        CarModel::HyundaiGenesis,
        &[
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00DH LKAS 1.1 -150210",
                    b"\xf1\x00DH LKAS 1.4 -140110",
                    b"\xf1\x00DH LKAS 1.5 -140425",
                ],
            ),
            (ABS, &[b"\xf1\x00DH ESC \x01 100\x14\x02\x25 58910-B1000"]),
            (ENGINE, &[b"\xf1\x81DH33L1\x00\x00\x00\x00"]),
        ],
    ),
    (
        CarModel::KiaTelluride,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00ON__ FCA FHCUP      1.00 1.02 99110-S9100         "],
            ),
            (ABS, &[b"\xf1\x00ON  ESC \x0b 100\x18\x12\x18 58910-S9360"]),
            (
                EPS,
                &[
                    b"\xf1\x00ON  MDPS C 1.00 1.00 56340-S9000 8B13",
                    b"\xf1\x00ON  MDPS C 1.00 1.01 56340-S9000 9201",
                ],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00ON  MFC  AT USA LHD 1.00 1.01 99211-S9100 190405",
                    b"\xf1\x00ON  MFC  AT USA LHD 1.00 1.03 99211-S9100 190720",
                ],
            ),
            (ENGINE, &[b"\xf1\x81HM6M1_0a0_H00"]),
            (
                TRANSMISSION,
                &[b"\xf1\x87LDLVBN560098KF26\x86fff\x87vgfg\x88\x96xfw\x86gfw\x86g\x95\xf6\xffeU_\xff\x92c\xf1\x81U891\x00\x00\x00\x00\x00\x00\xf1\x00bcsh8p54  U891\x00\x00\x00\x00\x00\x00SON0G38NB2\x00\x00\x00\x00"],
            ),
        ],
    ),
    (
        CarModel::KiaStinger,
        &[
            (
                FWD_RADAR,
                &[
                    b"\xf1\x00CK__ SCC F_CUP      1.00 1.01 96400-J5100         ",
                    b"\xf1\x00CK__ SCC F_CUP      1.00 1.03 96400-J5100         ",
                ],
            ),
            (
                EPS,
                &[
                    b"\xf1\x00CK  MDPS R 1.00 1.04 57700-J5200 4C2CL104",
                    b"\xf1\x00CK  MDPS R 1.00 1.04 57700-J5220 4C2VL104",
                ],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00CK  MFC  AT USA LHD 1.00 1.03 95740-J5000 170822",
                    b"\xf1\x00CK  MFC  AT USA LHD 1.00 1.04 95740-J5000 180504",
                ],
            ),
            (
                ENGINE,
                &[b"\xf1\x81606DE051\x00\x00\x00\x00\x00\x00\x00\x00"],
            ),
            (
                TRANSMISSION,
                &[b"\xf1\x87VDHLG17118862DK2\x8awWwgu\x96wVfUVwv\x97xWvfvUTGTx\x87o\xff\xc9\xed\xf1\x81E21\x00\x00\x00\x00\x00\x00\x00\xf1\x00bcsh8p54  E21\x00\x00\x00\x00\x00\x00\x00SCK0T33NB0\x88\xa2\xe6\xf0"],
            ),
        ],
    ),
    (
        CarModel::GenesisG70,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00IK__ SCC F-CUP      1.00 1.02 96400-G9100         "],
            ),
            (
                EPS,
                &[b"\xf1\x00IK  MDPS R 1.00 1.06 57700-G9420 4I4VL106"],
            ),
            (
                FWD_CAMERA,
                &[b"\xf1\x00IK  MFC  AT USA LHD 1.00 1.01 95740-G9000 170920"],
            ),
            (
                ENGINE,
                &[b"\xf1\x81640F0051\x00\x00\x00\x00\x00\x00\x00\x00"],
            ),
            (
                TRANSMISSION,
                &[b"\xf1\x87VDJLT17895112DN4\x88fVf\x99\x88\x88\x88\x87fVe\x88vhwwUFU\x97eFex\x99\xff\xb7\x82\xf1\x81E25\x00\x00\x00\x00\x00\x00\x00\xf1\x00bcsh8p54  E25\x00\x00\x00\x00\x00\x00\x00SIK0T33NB2\x11\x1am\xda"],
            ),
        ],
    ),
    (
        CarModel::GenesisG70_2020,
        &[
            (
                FWD_RADAR,
                &[
                    b"\xf1\x00IK__ SCC F-CUP      1.00 1.02 96400-G9100         ",
                    b"\xf1\x00IK__ SCC FHCUP      1.00 1.02 96400-G9100         ",
                ],
            ),
            (
                EPS,
                &[b"\xf1\x00IK  MDPS R 1.00 1.07 57700-G9420 4I4VL107"],
            ),
            (
                FWD_CAMERA,
                &[b"\xf1\x00IK  MFC  AT USA LHD 1.00 1.04 95740-G9000 170920"],
            ),
            (
                ENGINE,
                &[b"\xf1\x81640H0051\x00\x00\x00\x00\x00\x00\x00\x00"],
            ),
            (
                TRANSMISSION,
                &[b"\xf1\x00bcsh8p54  E25\x00\x00\x00\x00\x00\x00\x00SIK0T33NB4\xecE\xefL"],
            ),
        ],
    ),
    // =========================================================================
    // CAN FD
    // =========================================================================
    (
        CarModel::HyundaiIoniq5,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00NE1_ RDR -----      1.00 1.00 99110-GI000         "],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00NE1 MFC  AT USA LHD 1.00 1.02 99211-GI010 211206",
                    b"\xf1\x00NE1 MFC  AT USA LHD 1.00 1.05 99211-GI010 220614",
                ],
            ),
        ],
    ),
    (
        CarModel::HyundaiIoniq6,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00CE__ RDR -----      1.00 1.01 99110-KL000         "],
            ),
            (
                FWD_CAMERA,
                &[b"\xf1\x00CE  MFC  AT USA LHD 1.00 1.04 99211-KL000 221213"],
            ),
            (
                CORNER_RADAR,
                &[b"\xf1\x00CE__ CRR -----      1.00 1.00 99150-KL000         "],
            ),
        ],
    ),
    (
        CarModel::KiaEv6,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00CV1_ RDR -----      1.00 1.01 99110-CV000         "],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00CV1 MFC  AT USA LHD 1.00 1.05 99210-CV000 211027",
                    b"\xf1\x00CV1 MFC  AT USA LHD 1.00 1.06 99210-CV000 220328",
                ],
            ),
        ],
    ),
    (
        CarModel::HyundaiTucson4thGen,
        &[
            (
                FWD_RADAR,
                &[
                    b"\xf1\x00NX4__               1.00 1.00 99110-N9100         ",
                    b"\xf1\x00NX4__               1.01 1.00 99110-N9100         ",
                ],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00NX4 FR_CMR AT USA LHD 1.00 1.00 99211-N9240 14Q",
                    b"\xf1\x00NX4 FR_CMR AT USA LHD 1.00 1.01 99211-N9240 14T",
                ],
            ),
        ],
    ),
    (
        CarModel::HyundaiTucsonHybrid4thGen,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00NX4__               1.00 1.01 99110-N9100         "],
            ),
            (
                FWD_CAMERA,
                &[b"\xf1\x00NX4 FR_CMR AT USA LHD 1.00 1.00 99211-N9240 14T"],
            ),
            (
                HVAC,
                &[b"\xf1\x00NX4 FATC AT USA LHD 1.00 1.01 97255-N9210 2021"],
            ),
        ],
    ),
    (
        CarModel::KiaSportage5thGen,
        &[
            (
                FWD_RADAR,
                &[
                    b"\xf1\x00NQ5__               1.00 1.02 99110-P1000         ",
                    b"\xf1\x00NQ5__               1.00 1.03 99110-P1000         ",
                ],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00NQ5 FR_CMR AT USA LHD 1.00 1.00 99211-P1030 662",
                    b"\xf1\x00NQ5 FR_CMR AT USA LHD 1.00 1.00 99211-P1040 663",
                ],
            ),
        ],
    ),
    (
        CarModel::KiaSportageHybrid5thGen,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00NQ5__               1.00 1.02 99110-P1000         "],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00NQ5 FR_CMR AT USA LHD 1.00 1.00 99211-P1030 662",
                    b"\xf1\x00NQ5 FR_CMR AT USA LHD 1.00 1.00 99211-P1040 663",
                ],
            ),
        ],
    ),
    (
        CarModel::KiaSorento4thGen,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00MQ4_ SCC FHCUP      1.00 1.06 99110-P2000         "],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00MQ4 MFC  AT USA LHD 1.00 1.05 99210-R5000 210623",
                    b"\xf1\x00MQ4 MFC  AT USA LHD 1.00 1.06 99210-R5000 211216",
                ],
            ),
            (
                ADAS,
                &[b"\xf1\x00MQ4 ADAS DRV  1.00 1.02 99110-R5000 "],
            ),
        ],
    ),
    (
        CarModel::KiaSorentoHev4thGen,
        &[
            (
                FWD_RADAR,
                &[b"\xf1\x00MQ4_ SCC F-CUP      1.00 1.06 99110-P2000         "],
            ),
            (
                FWD_CAMERA,
                &[
                    b"\xf1\x00MQ4 MFC  AT USA LHD 1.00 1.05 99210-R5000 210623",
                    b"\xf1\x00MQ4 MFC  AT USA LHD 1.00 1.07 99210-R5000 211216",
                ],
            ),
        ],
    ),
];
