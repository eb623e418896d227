/// Integration tests for the full migration flow
/// Exercises split -> rewrite -> recompose on realistic catalog documents

#[cfg(test)]
mod tests {
    use crate::migrate::Migration;
    use crate::rewriter::FieldRewriter;
    use crate::splitter::split_records;
    use crate::tables::TranslationTables;

    fn catalog() -> String {
        concat!(
            "import { Product } from \"@/types\";\n",
            "\n",
            "const streetwearProducts: Product[] = [\n",
            "  {\n",
            "    id: \"sw-001\",\n",
            "    name: \"Oversized Black Tee\",\n",
            "    description: \"Premium heavyweight cotton tee with an oversized fit.\",\n",
            "    category: \"T-Shirts & Tops\",\n",
            "    price: 890,\n",
            "    colors: [\n",
            "      { name: \"Black\", hex: \"#000000\" },\n",
            "      { name: \"White\", hex: \"#FFFFFF\" }\n",
            "    ],\n",
            "  },\n",
            "  {\n",
            "    id: \"sw-014\",\n",
            "    name: \"Corduroy Bucket Hat\",\n",
            "    description: \"Soft corduroy bucket hat in earthy tones.\",\n",
            "    category: \"Accessories\",\n",
            "    price: 590,\n",
            "  },\n",
            "];\n",
            "\n",
            "export default streetwearProducts;\n"
        )
        .to_string()
    }

    #[test]
    fn migrates_a_realistic_catalog() {
        let migration = Migration::new(TranslationTables::streetwear());
        let (out, report) = migration.transform(&catalog());

        assert_eq!(report.records, 2);
        assert_eq!(report.fields_rewritten, 6);

        // First record: translated name and category
        assert!(out.contains("    name_th: \"เสื้อยืดโอเวอร์ไซส์สีดำ\",\n    name_en: \"Oversized Black Tee\",\n"));
        assert!(out.contains("    category_th: \"เสื้อยืดและเสื้อท็อป\",\n    category_en: \"T-Shirts & Tops\",\n"));

        // Second record: name not in the table, duplicated
        assert!(out.contains("    name_th: \"Corduroy Bucket Hat\",\n    name_en: \"Corduroy Bucket Hat\",\n"));
        assert!(out.contains("    category_th: \"เครื่องประดับ\",\n    category_en: \"Accessories\",\n"));

        // Nested color variants survive untouched
        assert!(out.contains("      { name: \"Black\", hex: \"#000000\" },\n"));
        assert!(out.contains("      { name: \"White\", hex: \"#FFFFFF\" }\n"));

        // Preamble and trailer survive untouched
        assert!(out.starts_with("import { Product } from \"@/types\";\n"));
        assert!(out.ends_with("export default streetwearProducts;\n"));
    }

    #[test]
    fn spec_block_end_to_end() {
        let migration = Migration::new(TranslationTables::streetwear());
        let doc = "  {\n    name: \"Vintage Graphic Tee\",\n    category: \"Outerwear\",\n  }";
        let (out, _) = migration.transform(doc);
        assert_eq!(
            out,
            "  {\n    name_th: \"เสื้อยืดกราฟิกวินเทจ\",\n    name_en: \"Vintage Graphic Tee\",\n    category_th: \"เสื้อนอก\",\n    category_en: \"Outerwear\",\n  }"
        );
    }

    #[test]
    fn migration_is_idempotent_on_its_own_output() {
        // `name_th:` / `name_en:` lines never match the `name: ` patterns,
        // so running the tool twice equals running it once.
        let migration = Migration::new(TranslationTables::streetwear());
        let (once, _) = migration.transform(&catalog());
        let (twice, report) = migration.transform(&once);
        assert_eq!(once, twice);
        assert_eq!(report.fields_rewritten, 0);
    }

    #[test]
    fn identity_rewrite_preserves_structure() {
        // Rewriting with no matchable fields reproduces the document exactly.
        let doc = concat!(
            "const products = [\n",
            "  {\n",
            "    id: \"1\",\n",
            "    price: 212.99,\n",
            "    sizes: [\"S\", \"M\", \"L\"],\n",
            "  },\n",
            "];\n"
        );
        let rewriter = FieldRewriter::new(TranslationTables::streetwear());
        let parts = split_records(doc);
        let blocks: Vec<String> = parts
            .blocks
            .iter()
            .map(|b| rewriter.rewrite_block(b).text)
            .collect();
        assert_eq!(crate::splitter::recompose(&parts.preamble, &blocks), doc);
    }
}
