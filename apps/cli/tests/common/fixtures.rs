//! Test fixtures for study set files.

/// Generate a valid set file with `num_words` rows.
///
/// Fields carry stray whitespace and the compound past is quoted, as in
/// hand-edited set files.
pub fn sample_set_content(num_words: usize) -> String {
    (0..num_words)
        .map(|i| {
            let n = i + 1;
            format!(
                " wort{n} , mot{n},je{n},tu{n},il{n},nous{n},vous{n},ils{n},\"j'ai eu {n}, enfin\"\n"
            )
        })
        .collect()
}

/// A set file whose second row lacks the compound past column.
pub fn short_row_content() -> String {
    "gehen,aller,vais,vas,va,allons,allez,vont,je suis allé\n\
     sagen,dire,dis,dis,dit,disons,dites,disent\n"
        .to_string()
}

/// A set file repeating two base forms.
pub fn duplicate_content() -> String {
    [
        "gehen,aller,vais,vas,va,allons,allez,vont,je suis allé",
        "sagen,dire,dis,dis,dit,disons,dites,disent,j'ai dit",
        "gehen ,aller,vais,vas,va,allons,allez,vont,je suis allé",
        "sagen,dire,dis,dis,dit,disons,dites,disent,j'ai dit",
    ]
    .join("\n")
}
