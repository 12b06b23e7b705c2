use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO pictograms (id, code, label, image, kind)
            VALUES
                (1, 'GHS01', 'Explosif', 'ghs01.png', 'danger'),
                (2, 'GHS02', 'Inflammable', 'ghs02.png', 'danger'),
                (3, 'GHS03', 'Comburant', 'ghs03.png', 'danger'),
                (4, 'GHS05', 'Corrosif', 'ghs05.png', 'danger'),
                (5, 'GHS06', 'Toxique', 'ghs06.png', 'danger'),
                (6, 'GHS07', 'Nocif ou irritant', 'ghs07.png', 'danger'),
                (7, 'GHS08', 'Danger pour la santé', 'ghs08.png', 'danger'),
                (8, 'GHS09', 'Danger pour l''environnement', 'ghs09.png', 'danger'),
                (9, 'M004', 'Port de lunettes obligatoire', 'm004.png', 'obligation'),
                (10, 'M009', 'Port de gants obligatoire', 'm009.png', 'obligation'),
                (11, 'M010', 'Port de vêtements de protection obligatoire', 'm010.png', 'obligation'),
                (12, 'M017', 'Port de masque obligatoire', 'm017.png', 'obligation')
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO products (id, slug, french_name, english_name, description, safety_instructions, updated_at)
            VALUES
                (1, 'acetone', 'Acétone', 'Acetone', 'Solvant incolore et volatil.', 'Tenir à l''écart de la chaleur et de toute flamme.', '2024-01-10 09:00:00+00'),
                (2, 'acide-chlorhydrique', 'Acide chlorhydrique', 'Hydrochloric acid', 'Solution aqueuse de chlorure d''hydrogène.', 'Manipuler sous hotte avec gants et lunettes.', '2024-01-11 09:00:00+00'),
                (3, 'ammoniaque', 'Ammoniaque', 'Ammonia solution', 'Solution aqueuse d''ammoniac.', 'Ne pas mélanger avec de l''eau de Javel.', '2024-01-12 09:00:00+00'),
                (4, 'eau-de-javel', 'Eau de Javel', 'Bleach', 'Solution d''hypochlorite de sodium.', 'Ne pas mélanger avec des acides.', '2024-01-13 09:00:00+00'),
                (5, 'ethanol', 'Éthanol', 'Ethanol', 'Alcool éthylique dénaturé.', 'Conserver dans un endroit frais et ventilé.', '2024-01-14 09:00:00+00'),
                (6, 'hydroxyde-de-sodium', 'Hydroxyde de sodium', 'Sodium hydroxide', 'Soude caustique en pastilles.', 'Réaction exothermique avec l''eau.', '2024-01-15 09:00:00+00'),
                (7, 'methanol', 'Méthanol', 'Methanol', 'Alcool méthylique.', 'Toxique par ingestion, inhalation et contact cutané.', '2024-01-16 09:00:00+00'),
                (8, 'peroxyde-d-hydrogene', 'Peroxyde d''hydrogène', 'Hydrogen peroxide', 'Eau oxygénée à 30 %.', 'Stocker à l''abri de la lumière.', '2024-01-17 09:00:00+00'),
                (9, 'toluene', 'Toluène', 'Toluene', 'Solvant aromatique.', 'Éviter l''inhalation des vapeurs.', '2024-01-18 09:00:00+00'),
                (10, 'white-spirit', 'White-spirit', NULL, 'Diluant pour peintures.', 'Ne pas rejeter dans les canalisations.', '2024-01-19 09:00:00+00'),
                (11, 'xylene', 'Xylène', 'Xylene', 'Mélange d''isomères du diméthylbenzène.', 'Utiliser un appareil respiratoire en cas de ventilation insuffisante.', '2024-01-20 09:00:00+00'),
                (12, 'acide-sulfurique', 'Acide sulfurique', 'Sulfuric acid', 'Acide fort concentré.', 'Toujours verser l''acide dans l''eau.', '2024-01-21 09:00:00+00')
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO product_pictograms (product_id, pictogram_id)
            VALUES
                (1, 2), (1, 6), (1, 9),
                (2, 4), (2, 6), (2, 9), (2, 10),
                (3, 4), (3, 8), (3, 9),
                (4, 4), (4, 8), (4, 10),
                (5, 2), (5, 6),
                (6, 4), (6, 9), (6, 10), (6, 11),
                (7, 2), (7, 5), (7, 7), (7, 10),
                (8, 3), (8, 4), (8, 9),
                (9, 2), (9, 7), (9, 12),
                (10, 2), (10, 7), (10, 8),
                (11, 2), (11, 6), (11, 12),
                (12, 4), (12, 9), (12, 10), (12, 11)
            ON CONFLICT DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO users (id, username, name, family_name, registered_at)
            VALUES
                (1, 'adupont', 'Alice', 'Dupont', '2023-03-01 08:00:00+00'),
                (2, 'bmartin', 'Bruno', 'Martin', '2023-06-15 08:00:00+00'),
                (3, 'cleroy', 'Chloé', 'Leroy', '2023-09-30 08:00:00+00'),
                (4, 'dmoreau', 'David', 'Moreau', '2024-01-05 08:00:00+00')
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO trash_cans (id, name, color)
            VALUES
                (1, 'Verre', '#2e7d32'),
                (2, 'Emballages', '#fbc02d'),
                (3, 'Déchets chimiques', '#c62828')
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        // Explicit ids above; move the sequences past them
        for table in ["pictograms", "products", "users", "trash_cans"] {
            db.execute_unprepared(&format!(
                "SELECT setval(pg_get_serial_sequence('{table}', 'id'), (SELECT MAX(id) FROM {table}))"
            ))
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DELETE FROM trash_cans WHERE id BETWEEN 1 AND 3")
            .await?;
        db.execute_unprepared("DELETE FROM users WHERE id BETWEEN 1 AND 4")
            .await?;
        db.execute_unprepared("DELETE FROM product_pictograms WHERE product_id BETWEEN 1 AND 12")
            .await?;
        db.execute_unprepared("DELETE FROM products WHERE id BETWEEN 1 AND 12")
            .await?;
        db.execute_unprepared("DELETE FROM pictograms WHERE id BETWEEN 1 AND 12")
            .await?;

        Ok(())
    }
}
