use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    pub birthday: DateTimeUtc,
    pub banned: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Player race, stored by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Race {
    #[sea_orm(string_value = "HUMAN")]
    Human,
    #[sea_orm(string_value = "DWARF")]
    Dwarf,
    #[sea_orm(string_value = "ELF")]
    Elf,
    #[sea_orm(string_value = "GIANT")]
    Giant,
    #[sea_orm(string_value = "ORC")]
    Orc,
    #[sea_orm(string_value = "TROLL")]
    Troll,
    #[sea_orm(string_value = "HOBBIT")]
    Hobbit,
}

/// Player profession, stored by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Profession {
    #[sea_orm(string_value = "WARRIOR")]
    Warrior,
    #[sea_orm(string_value = "ROGUE")]
    Rogue,
    #[sea_orm(string_value = "SORCERER")]
    Sorcerer,
    #[sea_orm(string_value = "CLERIC")]
    Cleric,
    #[sea_orm(string_value = "PALADIN")]
    Paladin,
    #[sea_orm(string_value = "NAZGUL")]
    Nazgul,
    #[sea_orm(string_value = "WARLOCK")]
    Warlock,
    #[sea_orm(string_value = "DRUID")]
    Druid,
}
