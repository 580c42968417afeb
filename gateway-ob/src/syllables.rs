//! The two 256-entry syllable tables of the `@p` encoding.
//!
//! Each table is stored as one packed string of three-letter syllables; the
//! syllable for byte `b` lives at `[b * 3..b * 3 + 3]`.

const PREFIXES: &str = concat!(
    "dozmarbinwansamlitsighidfidlissogdirwacsabwissib",
    "rigsoldopmodfoglidhopdardorlorhodfolrintogsilmir",
    "holpaslacrovlivdalsatlibtabhanticpidtorbolfosdot",
    "losdilforpilramtirwintadbicdifrocwidbisdasmidlop",
    "rilnardapmolsanlocnovsitnidtipsicropwitnatpanmin",
    "ritpodmottamtolsavposnapnopsomfinfonbanmorworsip",
    "ronnorbotwicsocwatdolmagpicdavbidbaltimtasmallig",
    "sivtagpadsaldivdactansidfabtarmonranniswolmispal",
    "lasdismaprabtobrollatlonnodnavfignomnibpagsopral",
    "bilhaddocridmocpacravripfaltodtiltinhapmicfanpat",
    "taclabmogsimsonpinlomrictapfirhasbosbatpochactid",
    "havsaplindibhosdabbitbarracparloddosbortochilmac",
    "tomdigfilfasmithobharmighinradmashalraglagfadtop",
    "mophabnilnosmilfopfamdatnoldinhatnacrisfotribhoc",
    "nimlarfitwalrapsarnalmoslandondanladdovrivbacpol",
    "laptalpitnambonrostonfodponsovnocsorlavmatmipfip",
);

const SUFFIXES: &str = concat!(
    "zodnecbudwessevpersutletfulpensytdurwepserwylsun",
    "rypsyxdyrnuphebpeglupdepdysputlughecryttyvsydnex",
    "lunmeplutseppesdelsulpedtemledtulmetwenbynhexfeb",
    "pyldulhetmevruttylwydtepbesdexsefwycburderneppur",
    "rysrebdennutsubpetrulsynregtydsupsemwynrecmegnet",
    "secmulnymtevwebsummutnyxrextebfushepbenmuswyxsym",
    "selrucdecwexsyrwetdylmynmesdetbetbeltuxtugmyrpel",
    "syptermebsetdutdegtexsurfeltudnuxruxrenwytnubmed",
    "lytdusnebrumtynseglyxpunresredfunrevrefmectedrus",
    "bexlebduxrynnumpyxrygryxfeptyrtustyclegnemfermer",
    "tenlusnussyltecmexpubrymtucfyllepdebbermughuttun",
    "bylsudpemdevlurdefbusbeprunmelpexdytbyttyplevmyl",
    "wedducfurfexnulluclennerlexrupnedlecrydlydfenwel",
    "nydhusrelrudneshesfetdesretdunlernyrsebhulryllud",
    "remlysfynwerrycsugnysnyllyndyndemluxfedsedbecmun",
    "lyrtesmudnytbyrsenwegfyrmurtelreptegpecnelnevfes",
);

/// Prefix syllable for a byte, used for the high byte of each 16-bit word.
pub fn prefix(byte: u8) -> &'static str {
    syllable(PREFIXES, byte)
}

/// Suffix syllable for a byte. Galaxies are named by a lone suffix.
pub fn suffix(byte: u8) -> &'static str {
    syllable(SUFFIXES, byte)
}

pub fn prefix_index(syllable: &str) -> Option<u8> {
    index_of(PREFIXES, syllable)
}

pub fn suffix_index(syllable: &str) -> Option<u8> {
    index_of(SUFFIXES, syllable)
}

fn syllable(table: &'static str, byte: u8) -> &'static str {
    let start = byte as usize * 3;
    &table[start..start + 3]
}

fn index_of(table: &'static str, wanted: &str) -> Option<u8> {
    if wanted.len() != 3 {
        return None;
    }
    (0..=u8::MAX).find(|&byte| syllable(table, byte) == wanted)
}
