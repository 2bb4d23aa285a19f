//! Fixed catalogs sampled by the field library.
//!
//! The enumerations serialize to the lowercase names the target schema
//! expects. Every table here is non-empty.

use serde::Serialize;

/// What the listing offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionAction {
    Buy,
    Rent,
    Daily,
}

impl TransactionAction {
    pub const ALL: [TransactionAction; 3] = [
        TransactionAction::Buy,
        TransactionAction::Rent,
        TransactionAction::Daily,
    ];
}

/// Kind of property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EstateType {
    Flat,
    Room,
    House,
}

impl EstateType {
    pub const ALL: [EstateType; 3] = [EstateType::Flat, EstateType::Room, EstateType::House];
}

/// Renovation level, only reported by the EstateInc dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Renovation {
    None,
    Decorating,
    European,
    Design,
}

impl Renovation {
    pub const ALL: [Renovation; 4] = [
        Renovation::None,
        Renovation::Decorating,
        Renovation::European,
        Renovation::Design,
    ];
}

/// Constant location fields of the Favihome address block.
pub const COUNTRY: &str = "Russia";
pub const CITY: &str = "Moscow";

/// Moscow administrative districts. Also used as metro station names.
pub const DISTRICTS: &[&str] = &[
    "Akademicheskij", "Alekseevskij", "Altuf'evskij", "Arbat", "Ajeroport", "Babushkinskij",
    "Basmannyj", "Begovoj", "Beskudnikovskij", "Bibirevo", "Birjuljovo Vostochnoe",
    "Birjuljovo Zapadnoe", "Bogorodskoe", "Brateevo", "Butovo Severnoe", "Butovo Juzhnoe",
    "Butyrskij", "Veshnjaki", "Vnukovo", "Vojkovskij", "Vostochnyj", "Vyhino-Zhulebino",
    "Gagarinskij", "Golovinskij", "Gol'janovo", "Danilovskij", "Degunino Vostochnoe",
    "Degunino Zapadnoe", "Dmitrovskij", "Donskoj", "Dorogomilovo", "Zamoskvorech'e", "Zjuzino",
    "Zjablikovo", "Ivanovskoe", "Izmajlovo Vostochnoe", "Izmajlovo", "Izmajlovo Severnoe",
    "Kapotnja", "Kon'kovo", "Koptevo", "Kosino-Uhtomskij", "Kotlovka", "Krasnosel'skij",
    "Krylatskoe", "Krjukovo", "Kuz'minki", "Kuncevo", "Kurkino", "Levoberezhnyj", "Lefortovo",
    "Lianozovo", "Lomonosovskij", "Losinoostrovskij", "Ljublino", "Marfino", "Marina roshha",
    "Mar'ino", "Matushkino", "Medvedkovo Severnoe", "Medvedkovo Juzhnoe", "Metrogorodok",
    "Meshhanskij", "Mitino", "Mozhajskij", "Molzhaninovskij", "Moskvorech'e-Saburovo",
    "Nagatino-Sadovniki", "Nagatinskij zaton", "Nagornyj", "Nekrasovka", "Nizhegorodskij",
    "Novo-Peredelkino", "Novogireevo", "Novokosino", "Obruchevskij", "Orehovo-Borisovo Severnoe",
    "Orehovo-Borisovo Juzhnoe", "Ostankinskij", "Otradnoe", "Ochakovo-Matveevskoe", "Perovo",
    "Pechatniki", "Pokrovskoe-Streshnevo", "Preobrazhenskoe", "Presnenskij",
    "Prospekt Vernadskogo", "Ramenki", "Rostokino", "Rjazanskij", "Savjolki", "Savjolovskij",
    "Sviblovo", "Severnyj", "Silino", "Sokol", "Sokolinaja gora", "Sokol'niki", "Solncevo",
    "Staroe Krjukovo", "Strogino", "Taganskij", "Tverskoj", "Tekstil'shhiki", "Tjoplyj Stan",
    "Timirjazevskij", "Troparjovo-Nikulino", "Tushino Severnoe", "Tushino Juzhnoe",
    "Filjovskij park", "Fili-Davydkovo", "Hamovniki", "Hovrino", "Horoshjovo-Mnevniki",
    "Horoshjovskij", "Caricyno", "Cherjomushki", "Chertanovo Severnoe", "Chertanovo Central'noe",
    "Chertanovo Juzhnoe", "Shhukino", "Juzhnoportovyj", "Jakimanka", "Jaroslavskij", "Jasenevo",
];

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Alexander", "Anna", "Boris", "Daria", "Dmitry", "Elena", "Fedor", "Galina", "Igor", "Irina",
    "Kirill", "Ksenia", "Leonid", "Maria", "Mikhail", "Natalia", "Nikolai", "Olga", "Pavel",
    "Polina", "Roman", "Svetlana", "Sergey", "Tatiana", "Vadim", "Valeria", "Viktor", "Yulia",
    "Yuri", "Zoya",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Alekseev", "Belov", "Bogdanov", "Volkov", "Vorobyov", "Gusev", "Egorov", "Zaitsev", "Ivanov",
    "Kiselev", "Kozlov", "Kuznetsov", "Lebedev", "Makarov", "Morozov", "Nikitin", "Novikov",
    "Orlov", "Pavlov", "Petrov", "Popov", "Romanov", "Semyonov", "Smirnov", "Sokolov", "Stepanov",
    "Tarasov", "Fedorov", "Frolov", "Yakovlev",
];

pub(crate) const STREET_NAMES: &[&str] = &[
    "Arbat", "Bolshaya Ordynka", "Gagarina", "Kutuzovsky", "Leninsky", "Lesnaya", "Lomonosova",
    "Mira", "Myasnitskaya", "Novy Arbat", "Ostozhenka", "Petrovka", "Pokrovka", "Profsoyuznaya",
    "Pushkina", "Sadovaya", "Sretenka", "Tverskaya", "Vavilova", "Zhukova",
];

pub(crate) const STREET_SUFFIXES: &[&str] = &["ulitsa", "prospekt", "pereulok", "bulvar", "shosse"];
