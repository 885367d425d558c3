//! Treeviz dumps of converted documents

use insta::assert_snapshot;
use quire_engine::{treeviz, Converter};

#[test]
fn test_treeviz_of_a_small_guide() {
    let md = "Intro text.\n\n# Guide\n\nRead *this*.\n\n## Install\n\n- one\n- two\n\n| Name | Size |\n|------|------|\n| a    | 1    |\n";
    let tree = Converter::default().convert_markdown(md).expect("converts");

    assert_snapshot!(treeviz::render(&tree).trim_end(), @r"
    ├─ ¶ Intro text.
    └─ § Guide
      ├─ ¶ Read this.
      └─ § Install
        ├─ ☰ 2 items
        │ ├─ • one
        │ │ └─ ¶ one
        │ └─ • two
        │   └─ ¶ two
        └─ ▦ 2 rows, 2 columns
          ├─ ▤ Name | Size
          └─ ▤ a | 1
    ");
}

#[test]
fn test_treeviz_of_a_diagram() {
    let md = "```ditaa\n+--+\n|  |\n+--+\n```\n";
    let tree = Converter::default().convert_markdown(md).expect("converts");
    assert_eq!(treeviz::render(&tree), "└─ ▣ 80x84 px at 50%\n");
}
