//! # Léxicos por Idioma
//!
//! Cada modelo embutido (`en`, `de`, `pt`) é descrito por um [`LanguageProfile`]:
//! listas fechadas de palavras (artigos, pronomes, preposições...), tabelas de
//! verbos auxiliares e irregulares, e gazetteers para o reconhecedor de
//! entidades. Nada aqui é aprendido; são listas escritas à mão, suficientes
//! para produzir análises estáveis e determinísticas.

/// Família de regras morfológicas usada para palavras fora do léxico.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Morphology {
    English,
    German,
    Portuguese,
}

/// Tudo o que o motor precisa saber sobre um idioma.
pub struct LanguageProfile {
    /// Código do modelo (ex: "en").
    pub code: &'static str,
    /// Nome legível do idioma.
    pub name: &'static str,
    pub morphology: Morphology,
    /// Substantivos comuns são escritos com maiúscula (alemão).
    pub capitalized_nouns: bool,
    /// Adjetivos costumam vir depois do substantivo (português).
    pub adjectives_follow_noun: bool,

    pub abbreviations: &'static [&'static str],
    pub determiners: &'static [&'static str],
    pub possessives: &'static [&'static str],
    pub pronouns: &'static [&'static str],
    /// Pronomes/advérbios interrogativos e relativos com sua tag.
    pub wh_words: &'static [(&'static str, &'static str)],
    pub prepositions: &'static [&'static str],
    /// Marcador de infinitivo ("to", "zu").
    pub infinitive_markers: &'static [&'static str],
    pub conjunctions: &'static [&'static str],
    pub subordinators: &'static [&'static str],
    pub modals: &'static [&'static str],
    /// (forma, lema, tag)
    pub auxiliaries: &'static [(&'static str, &'static str, &'static str)],
    pub negations: &'static [&'static str],
    pub adverbs: &'static [&'static str],
    pub adjectives: &'static [&'static str],
    pub number_words: &'static [&'static str],
    /// Lemas de verbos conhecidos.
    pub verbs: &'static [&'static str],
    /// (forma, lema, tag)
    pub irregular_verbs: &'static [(&'static str, &'static str, &'static str)],
    /// Lemas de verbos de ligação (recebem `attr`/`acomp`).
    pub copulas: &'static [&'static str],
    pub extra_stop_words: &'static [&'static str],

    pub months: &'static [&'static str],
    pub person_titles: &'static [&'static str],
    pub org_suffixes: &'static [&'static str],
    pub given_names: &'static [&'static str],
    pub persons: &'static [&'static str],
    pub locations: &'static [&'static str],
    pub organizations: &'static [&'static str],
    pub misc: &'static [&'static str],
}

impl LanguageProfile {
    /// Procura um perfil pelo código do modelo.
    pub fn by_code(code: &str) -> Option<&'static LanguageProfile> {
        PROFILES.iter().copied().find(|p| p.code == code)
    }

    /// Palavra pertence a alguma classe fechada (ou à lista extra de stop words).
    pub fn is_stop_word(&self, lower: &str) -> bool {
        self.determiners.contains(&lower)
            || self.possessives.contains(&lower)
            || self.pronouns.contains(&lower)
            || self.wh_words.iter().any(|(w, _)| *w == lower)
            || self.prepositions.contains(&lower)
            || self.infinitive_markers.contains(&lower)
            || self.conjunctions.contains(&lower)
            || self.subordinators.contains(&lower)
            || self.modals.contains(&lower)
            || self.auxiliaries.iter().any(|(w, _, _)| *w == lower)
            || self.negations.contains(&lower)
            || self.adverbs.contains(&lower)
            || self.extra_stop_words.contains(&lower)
    }
}

/// Todos os perfis embutidos, na ordem em que são anunciados em `/models`.
pub static PROFILES: &[&LanguageProfile] = &[&ENGLISH, &GERMAN, &PORTUGUESE];

pub static ENGLISH: LanguageProfile = LanguageProfile {
    code: "en",
    name: "English",
    morphology: Morphology::English,
    capitalized_nouns: false,
    adjectives_follow_noun: false,
    abbreviations: &[
        "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "Gen", "Gov", "Sen", "Rep",
        "Inc", "Corp", "Ltd", "Co", "vs", "etc", "No", "Jan", "Feb", "Mar", "Apr", "Jun",
        "Jul", "Aug", "Sep", "Sept", "Oct", "Nov", "Dec", "Mt", "approx",
    ],
    determiners: &[
        "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any",
        "no", "all", "both", "another", "either", "neither",
    ],
    possessives: &["my", "your", "his", "her", "its", "our", "their"],
    pronouns: &[
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
        "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
        "someone", "something", "everyone", "everything", "nobody", "nothing", "anyone",
        "anything",
    ],
    wh_words: &[
        ("which", "WDT"), ("who", "WP"), ("whom", "WP"), ("whose", "WP$"), ("what", "WP"),
        ("where", "WRB"), ("when", "WRB"), ("why", "WRB"), ("how", "WRB"),
    ],
    prepositions: &[
        "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "from", "up", "down",
        "over", "under", "across", "along", "around", "behind", "beyond", "near", "off",
        "since", "toward", "towards", "upon", "within", "without", "among", "via", "per",
        "like", "than", "despite", "inside", "outside", "onto",
    ],
    infinitive_markers: &["to"],
    conjunctions: &["and", "or", "but", "nor"],
    subordinators: &["because", "although", "though", "while", "if", "unless", "whereas", "whether", "as"],
    modals: &[
        "can", "could", "may", "might", "must", "shall", "should", "will", "would", "'ll",
        "'d", "ca", "wo",
    ],
    auxiliaries: &[
        ("am", "be", "VBP"), ("is", "be", "VBZ"), ("are", "be", "VBP"), ("was", "be", "VBD"),
        ("were", "be", "VBD"), ("be", "be", "VB"), ("been", "be", "VBN"), ("being", "be", "VBG"),
        ("has", "have", "VBZ"), ("have", "have", "VBP"), ("had", "have", "VBD"),
        ("having", "have", "VBG"), ("does", "do", "VBZ"), ("do", "do", "VBP"),
        ("did", "do", "VBD"), ("'re", "be", "VBP"), ("'m", "be", "VBP"),
        ("'ve", "have", "VBP"),
    ],
    negations: &["not", "never", "n't"],
    adverbs: &[
        "very", "also", "just", "only", "now", "then", "here", "there", "still", "already",
        "soon", "often", "always", "sometimes", "usually", "really", "quite", "too", "again",
        "almost", "even", "ever", "well", "however", "perhaps", "today", "yesterday",
        "tomorrow", "away", "back", "together", "rather", "instead", "recently", "later",
        "so", "yet",
    ],
    adjectives: &[
        "quick", "brown", "lazy", "big", "small", "large", "little", "new", "old", "young",
        "good", "bad", "great", "high", "low", "long", "short", "first", "last", "other",
        "same", "different", "important", "public", "private", "major", "local", "national",
        "international", "political", "social", "economic", "red", "blue", "green", "black",
        "white", "happy", "sad", "early", "late", "free", "full", "strong", "real", "main",
        "best", "better", "several", "many", "few", "more", "most", "much", "less", "next",
        "own", "whole", "top", "hot", "cold", "fast", "slow", "easy", "hard", "clear",
    ],
    number_words: &[
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "twenty", "thirty", "hundred", "thousand", "million", "billion",
        "dozen",
    ],
    verbs: &[
        "say", "make", "go", "take", "see", "know", "get", "give", "find", "think", "tell",
        "become", "leave", "feel", "put", "bring", "begin", "keep", "hold", "write", "stand",
        "hear", "let", "mean", "set", "meet", "run", "pay", "sit", "speak", "lead", "read",
        "grow", "lose", "fall", "send", "build", "understand", "draw", "break", "spend",
        "cut", "rise", "drive", "buy", "wear", "choose", "eat", "win", "sell", "catch",
        "teach", "fight", "fly", "throw", "come", "jump", "love", "like", "acquire", "found",
        "announce", "develop", "visit", "open", "create", "use", "want", "need", "play",
        "live", "work", "call", "try", "ask", "seem", "help", "show", "move", "believe",
        "happen", "provide", "include", "continue", "change", "watch", "follow", "stop",
        "learn", "add", "offer", "remember", "consider", "appear", "serve", "die", "send",
        "expect", "stay", "reach", "kill", "remain", "suggest", "raise", "pass", "report",
        "decide", "pull", "launch", "release", "sign", "join", "own", "hire", "study",
        "produce", "receive", "support", "plan", "start", "close", "design", "invent",
        "discover", "bark", "chase", "sleep", "walk", "talk", "invest", "elect", "travel",
    ],
    irregular_verbs: &[
        ("said", "say", "VBD"), ("made", "make", "VBD"), ("went", "go", "VBD"),
        ("gone", "go", "VBN"), ("took", "take", "VBD"), ("taken", "take", "VBN"),
        ("saw", "see", "VBD"), ("seen", "see", "VBN"), ("knew", "know", "VBD"),
        ("known", "know", "VBN"), ("got", "get", "VBD"), ("gotten", "get", "VBN"),
        ("gave", "give", "VBD"), ("given", "give", "VBN"), ("found", "find", "VBD"),
        ("thought", "think", "VBD"), ("told", "tell", "VBD"), ("became", "become", "VBD"),
        ("left", "leave", "VBD"), ("felt", "feel", "VBD"), ("brought", "bring", "VBD"),
        ("began", "begin", "VBD"), ("begun", "begin", "VBN"), ("kept", "keep", "VBD"),
        ("held", "hold", "VBD"), ("wrote", "write", "VBD"), ("written", "write", "VBN"),
        ("stood", "stand", "VBD"), ("heard", "hear", "VBD"), ("meant", "mean", "VBD"),
        ("met", "meet", "VBD"), ("ran", "run", "VBD"), ("paid", "pay", "VBD"),
        ("sat", "sit", "VBD"), ("spoke", "speak", "VBD"), ("spoken", "speak", "VBN"),
        ("led", "lead", "VBD"), ("grew", "grow", "VBD"), ("grown", "grow", "VBN"),
        ("lost", "lose", "VBD"), ("fell", "fall", "VBD"), ("fallen", "fall", "VBN"),
        ("sent", "send", "VBD"), ("built", "build", "VBD"), ("understood", "understand", "VBD"),
        ("drew", "draw", "VBD"), ("drawn", "draw", "VBN"), ("broke", "break", "VBD"),
        ("broken", "break", "VBN"), ("spent", "spend", "VBD"), ("rose", "rise", "VBD"),
        ("risen", "rise", "VBN"), ("drove", "drive", "VBD"), ("driven", "drive", "VBN"),
        ("bought", "buy", "VBD"), ("wore", "wear", "VBD"), ("worn", "wear", "VBN"),
        ("chose", "choose", "VBD"), ("chosen", "choose", "VBN"), ("ate", "eat", "VBD"),
        ("eaten", "eat", "VBN"), ("won", "win", "VBD"), ("sold", "sell", "VBD"),
        ("caught", "catch", "VBD"), ("taught", "teach", "VBD"), ("fought", "fight", "VBD"),
        ("flew", "fly", "VBD"), ("flown", "fly", "VBN"), ("threw", "throw", "VBD"),
        ("thrown", "throw", "VBN"), ("came", "come", "VBD"), ("says", "say", "VBZ"),
        ("goes", "go", "VBZ"),
    ],
    copulas: &["be", "become", "seem", "remain"],
    extra_stop_words: &["also", "such", "there", "here", "very"],

    months: &[
        "january", "february", "march", "april", "may", "june", "july", "august",
        "september", "october", "november", "december",
    ],
    person_titles: &[
        "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "dr", "dr.", "prof", "prof.", "president",
        "senator", "governor", "minister", "ceo", "judge", "king", "queen", "sir", "lady",
        "general", "captain", "mayor", "pope", "chancellor", "prince", "princess",
    ],
    org_suffixes: &[
        "inc", "inc.", "corp", "corp.", "corporation", "ltd", "ltd.", "llc", "co.", "company",
        "group", "plc", "gmbh", "ag", "foundation", "university", "bank", "institute",
        "association", "agency",
    ],
    given_names: &[
        "john", "mary", "james", "robert", "michael", "william", "david", "richard", "joseph",
        "thomas", "charles", "barack", "donald", "joe", "hillary", "elizabeth", "sarah",
        "emma", "olivia", "angela", "george", "paul", "peter", "anna", "maria", "steve",
        "bill", "tim", "elon", "jeff", "mark", "alice", "bob", "susan", "linda", "kevin",
    ],
    persons: &[
        "barack obama", "donald trump", "joe biden", "angela merkel", "elon musk",
        "steve jobs", "bill gates", "tim cook", "jeff bezos", "mark zuckerberg",
        "albert einstein", "marie curie", "william shakespeare",
    ],
    locations: &[
        "london", "paris", "berlin", "new york", "washington", "california", "texas",
        "germany", "france", "brazil", "china", "japan", "india", "russia", "canada",
        "europe", "africa", "asia", "america", "united states", "united kingdom", "england",
        "spain", "italy", "mexico", "tokyo", "beijing", "moscow", "chicago", "boston",
        "san francisco", "los angeles", "munich", "hamburg", "rome", "madrid", "australia",
        "cupertino", "seattle",
    ],
    organizations: &[
        "apple", "google", "microsoft", "amazon", "facebook", "meta", "ibm", "intel",
        "nasa", "fbi", "cia", "united nations", "european union", "tesla", "netflix",
        "twitter", "openai", "volkswagen", "siemens", "bmw", "nato", "unesco",
        "world bank", "congress", "senate",
    ],
    misc: &[
        "christmas", "easter", "olympics", "world cup", "english", "german", "french",
        "spanish", "american", "british", "christianity", "islam", "covid-19", "iphone",
        "windows",
    ],
};

pub static GERMAN: LanguageProfile = LanguageProfile {
    code: "de",
    name: "Deutsch",
    morphology: Morphology::German,
    capitalized_nouns: true,
    adjectives_follow_noun: false,
    abbreviations: &["Dr", "Prof", "Nr", "bzw", "usw", "ca", "Str", "Hr", "Fr", "vgl", "evtl", "ggf"],
    determiners: &[
        "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer",
        "eines", "kein", "keine", "keinen", "jeder", "jede", "jedes", "dieser", "diese",
        "dieses", "alle",
    ],
    possessives: &[
        "mein", "meine", "meinen", "sein", "seine", "seinen", "ihr", "ihre", "ihren",
        "unser", "unsere", "euer", "eure", "dein", "deine",
    ],
    pronouns: &[
        "ich", "du", "er", "sie", "es", "wir", "ihr", "man", "mich", "dich", "ihn", "uns",
        "euch", "ihnen", "ihm", "mir", "dir", "sich", "jemand", "niemand", "etwas", "nichts",
    ],
    wh_words: &[
        ("welcher", "WDT"), ("welche", "WDT"), ("welches", "WDT"), ("wer", "WP"),
        ("was", "WP"), ("wo", "WRB"), ("wann", "WRB"), ("warum", "WRB"), ("wie", "WRB"),
    ],
    prepositions: &[
        "in", "an", "auf", "aus", "bei", "mit", "nach", "von", "vor", "über", "unter", "für",
        "gegen", "ohne", "durch", "um", "zwischen", "hinter", "neben", "seit", "während",
        "wegen", "im", "am", "zum", "zur", "vom", "beim", "ins", "bis",
    ],
    infinitive_markers: &["zu"],
    conjunctions: &["und", "oder", "aber", "sondern"],
    subordinators: &["dass", "weil", "wenn", "ob", "obwohl", "als", "da"],
    modals: &[
        "kann", "kannst", "können", "könnte", "muss", "müssen", "soll", "sollen", "will",
        "wollen", "darf", "dürfen", "möchte",
    ],
    auxiliaries: &[
        ("ist", "sein", "VBZ"), ("sind", "sein", "VBP"), ("war", "sein", "VBD"),
        ("waren", "sein", "VBD"), ("bin", "sein", "VBP"), ("bist", "sein", "VBP"),
        ("seid", "sein", "VBP"), ("gewesen", "sein", "VBN"), ("hat", "haben", "VBZ"),
        ("haben", "haben", "VBP"), ("hatte", "haben", "VBD"), ("hatten", "haben", "VBD"),
        ("habe", "haben", "VBP"), ("hast", "haben", "VBP"), ("wird", "werden", "VBZ"),
        ("werden", "werden", "VBP"), ("wurde", "werden", "VBD"), ("wurden", "werden", "VBD"),
        ("geworden", "werden", "VBN"),
    ],
    negations: &["nicht", "nie", "niemals"],
    adverbs: &[
        "sehr", "auch", "noch", "schon", "nur", "immer", "hier", "dort", "heute", "gestern",
        "morgen", "jetzt", "bald", "oft", "dann", "gern", "wieder", "sofort", "bereits",
    ],
    adjectives: &[
        "groß", "klein", "neu", "alt", "gut", "schlecht", "schnell", "lang", "kurz", "hoch",
        "jung", "schön", "braun", "faul", "rot", "blau", "grün", "schwarz", "weiß",
    ],
    number_words: &[
        "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
        "hundert", "tausend", "million", "millionen", "milliarden",
    ],
    verbs: &[
        "gehen", "kommen", "machen", "sehen", "sagen", "geben", "finden", "springen",
        "kaufen", "spielen", "arbeiten", "leben", "lieben", "bauen", "gründen", "kündigen",
        "entwickeln", "besuchen", "verkaufen", "gewinnen", "lesen", "schreiben", "essen",
    ],
    irregular_verbs: &[
        ("ging", "gehen", "VBD"), ("gegangen", "gehen", "VBN"), ("kam", "kommen", "VBD"),
        ("gekommen", "kommen", "VBN"), ("sah", "sehen", "VBD"), ("gesehen", "sehen", "VBN"),
        ("gab", "geben", "VBD"), ("gegeben", "geben", "VBN"), ("fand", "finden", "VBD"),
        ("gefunden", "finden", "VBN"), ("sprang", "springen", "VBD"),
        ("springt", "springen", "VBZ"), ("gewann", "gewinnen", "VBD"),
        ("schrieb", "schreiben", "VBD"), ("las", "lesen", "VBD"), ("aß", "essen", "VBD"),
        ("geht", "gehen", "VBZ"), ("kommt", "kommen", "VBZ"), ("sieht", "sehen", "VBZ"),
        ("gibt", "geben", "VBZ"),
    ],
    copulas: &["sein", "werden", "bleiben"],
    extra_stop_words: &["so", "ja", "doch", "mal"],

    months: &[
        "januar", "februar", "märz", "april", "mai", "juni", "juli", "august", "september",
        "oktober", "november", "dezember",
    ],
    person_titles: &[
        "herr", "frau", "dr", "dr.", "prof", "prof.", "präsident", "präsidentin", "kanzler",
        "kanzlerin", "minister", "ministerin", "bürgermeister",
    ],
    org_suffixes: &["gmbh", "ag", "kg", "se", "e.v.", "verein", "universität", "bank", "konzern"],
    given_names: &[
        "angela", "olaf", "helmut", "klaus", "hans", "peter", "anna", "maria", "thomas",
        "michael", "stefan", "andreas", "julia", "frank", "markus",
    ],
    persons: &["angela merkel", "olaf scholz", "helmut kohl", "johann wolfgang von goethe"],
    locations: &[
        "deutschland", "berlin", "münchen", "hamburg", "köln", "frankfurt", "österreich",
        "wien", "schweiz", "zürich", "europa", "frankreich", "paris", "london", "bayern",
    ],
    organizations: &[
        "siemens", "volkswagen", "bmw", "daimler", "bosch", "sap", "lufthansa", "bundestag",
        "bundesbank", "adidas", "deutsche bahn", "deutsche bank",
    ],
    misc: &["weihnachten", "ostern", "olympia", "deutsch", "englisch", "oktoberfest"],
};

pub static PORTUGUESE: LanguageProfile = LanguageProfile {
    code: "pt",
    name: "Português",
    morphology: Morphology::Portuguese,
    capitalized_nouns: false,
    adjectives_follow_noun: true,
    abbreviations: &[
        "Dr", "Dra", "Sr", "Sra", "Prof", "Profa", "Gov", "Dep", "Sen", "Min", "Gen", "Cap",
        "Sgt", "Cel", "Brig", "Adm", "Des", "Pres", "Eng", "Arq", "km", "cm", "mm", "kg",
        "mg", "ml", "etc", "vol", "núm", "art", "pág", "pag", "tel", "av", "pg",
    ],
    determiners: &[
        "o", "a", "os", "as", "um", "uma", "uns", "umas", "este", "esta", "estes", "estas",
        "esse", "essa", "esses", "essas", "aquele", "aquela", "cada", "todo", "toda",
        "todos", "todas",
    ],
    possessives: &["meu", "minha", "seu", "sua", "seus", "suas", "nosso", "nossa", "dele", "dela"],
    pronouns: &[
        "eu", "tu", "ele", "ela", "nós", "eles", "elas", "você", "vocês", "me", "te", "se",
        "lhe", "lhes", "isso", "isto", "aquilo", "alguém", "ninguém", "nada", "tudo",
    ],
    wh_words: &[
        ("que", "WDT"), ("quem", "WP"), ("qual", "WDT"), ("onde", "WRB"), ("como", "WRB"),
        ("cujo", "WP$"),
    ],
    prepositions: &[
        "de", "em", "para", "por", "com", "sem", "sobre", "entre", "até", "contra", "desde",
        "após", "do", "da", "dos", "das", "no", "na", "nos", "nas", "ao", "aos", "à", "às",
        "pelo", "pela", "pelos", "pelas", "num", "numa",
    ],
    infinitive_markers: &[],
    conjunctions: &["e", "ou", "mas", "nem"],
    subordinators: &["porque", "embora", "se", "quando", "enquanto", "pois"],
    modals: &["pode", "podem", "poderia", "deve", "devem", "deveria"],
    auxiliaries: &[
        ("é", "ser", "VBZ"), ("são", "ser", "VBP"), ("era", "ser", "VBD"), ("foi", "ser", "VBD"),
        ("foram", "ser", "VBD"), ("ser", "ser", "VB"), ("sido", "ser", "VBN"),
        ("está", "estar", "VBZ"), ("estão", "estar", "VBP"), ("estava", "estar", "VBD"),
        ("esteve", "estar", "VBD"), ("tem", "ter", "VBZ"), ("têm", "ter", "VBP"),
        ("tinha", "ter", "VBD"), ("teve", "ter", "VBD"), ("ter", "ter", "VB"),
        ("há", "haver", "VBZ"), ("vai", "ir", "VBZ"), ("vão", "ir", "VBP"),
    ],
    negations: &["não", "nunca"],
    adverbs: &[
        "muito", "também", "já", "ainda", "sempre", "hoje", "ontem", "amanhã", "aqui", "lá",
        "bem", "mal", "mais", "menos", "só", "apenas", "logo",
    ],
    adjectives: &[
        "grande", "pequeno", "pequena", "novo", "nova", "velho", "velha", "bom", "boa",
        "rápido", "rápida", "brasileiro", "brasileira", "principal", "federal", "marrom",
        "preguiçoso", "público", "pública",
    ],
    number_words: &[
        "dois", "duas", "três", "quatro", "cinco", "seis", "sete", "oito", "nove", "dez",
        "cem", "mil", "milhão", "milhões", "bilhão", "bilhões",
    ],
    verbs: &[
        "anunciar", "ganhar", "vencer", "comprar", "vender", "desenvolver", "aprovar",
        "decidir", "visitar", "criar", "fazer", "dizer", "ir", "ver", "dar", "saber",
        "querer", "chegar", "passar", "pular", "saltar", "fundar", "investir", "lançar",
    ],
    irregular_verbs: &[
        ("fez", "fazer", "VBD"), ("faz", "fazer", "VBZ"), ("disse", "dizer", "VBD"),
        ("diz", "dizer", "VBZ"), ("deu", "dar", "VBD"), ("viu", "ver", "VBD"),
        ("veio", "vir", "VBD"), ("quis", "querer", "VBD"), ("pôs", "pôr", "VBD"),
        ("soube", "saber", "VBD"),
    ],
    copulas: &["ser", "estar", "ficar", "parecer"],
    extra_stop_words: &["mesmo", "outro", "outra", "tão"],

    months: &[
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
        "setembro", "outubro", "novembro", "dezembro",
    ],
    person_titles: &[
        "presidente", "ex-presidente", "senador", "senadora", "deputado", "deputada",
        "ministro", "ministra", "governador", "governadora", "prefeito", "prefeita",
        "general", "capitão", "dr", "dr.", "dra", "dra.", "prof", "prof.", "profa",
        "vereador", "vereadora", "secretário", "secretária", "diretor", "diretora", "ceo",
        "jogador", "jogadora", "técnico", "técnica", "atleta", "ator", "atriz", "cantor",
        "cantora",
    ],
    org_suffixes: &[
        "s.a.", "s/a", "ltda", "eireli", "me", "epp", "sa", "inc", "corp", "holdings",
        "group", "fc", "esporte", "clube",
    ],
    given_names: &[
        "luiz", "maria", "josé", "joão", "ana", "paulo", "carlos", "pedro", "lucas",
        "fernanda", "juliana", "marcos", "dilma", "margareth",
    ],
    persons: &[
        "lula", "bolsonaro", "pelé", "dilma rousseff", "machado de assis",
        "luiz inácio lula da silva", "santos dumont",
    ],
    locations: &[
        "brasil", "são paulo", "rio de janeiro", "minas gerais", "bahia", "amazônia",
        "brasília", "portugal", "lisboa", "recife", "salvador", "curitiba", "paraná",
    ],
    organizations: &[
        "petrobras", "embraer", "fiocruz", "anvisa", "stf", "flamengo", "vale", "itaú",
        "bradesco", "ibge", "supremo tribunal federal", "banco central",
    ],
    misc: &["copa do mundo", "carnaval", "covid-19", "pib", "lei áurea"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_by_code() {
        assert_eq!(LanguageProfile::by_code("en").map(|p| p.name), Some("English"));
        assert!(LanguageProfile::by_code("de").is_some());
        assert!(LanguageProfile::by_code("pt").is_some());
        assert!(LanguageProfile::by_code("xx").is_none());
    }

    #[test]
    fn test_stop_words() {
        assert!(ENGLISH.is_stop_word("the"));
        assert!(ENGLISH.is_stop_word("of"));
        assert!(!ENGLISH.is_stop_word("fox"));
        assert!(PORTUGUESE.is_stop_word("não"));
    }

    #[test]
    fn test_gazetteers_are_lowercase() {
        for profile in PROFILES {
            for entry in profile
                .persons
                .iter()
                .chain(profile.locations)
                .chain(profile.organizations)
                .chain(profile.misc)
            {
                assert_eq!(*entry, entry.to_lowercase(), "{} em {}", entry, profile.code);
            }
        }
    }
}
