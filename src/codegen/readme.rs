//! `README.md` for the generated project.

use crate::config::DatasourceOptions;

/// `application.properties` for a PostgreSQL datasource.
pub fn application_properties(ds: &DatasourceOptions) -> String {
    format!(
        "spring.application.name={app}
spring.jpa.database=POSTGRESQL
spring.datasource.url=jdbc:postgresql://{host}:{port}/{db}
spring.datasource.username={user}
spring.datasource.password={password}
spring.jpa.show-sql=true
spring.jackson.serialization.fail-on-empty-beans=false
spring.jpa.database-platform=org.hibernate.dialect.PostgreSQLDialect
spring.jpa.hibernate.ddl-auto=update
server.port={server_port}
",
        app = ds.application_name,
        host = ds.host,
        port = ds.port,
        db = ds.database,
        user = ds.username,
        password = ds.password,
        server_port = ds.server_port,
    )
}

pub fn render_readme(ds: &DatasourceOptions) -> String {
    format!(
        r#"# Generated Project

This archive contains:

- **models**: JPA persistence classes.
- **repositories**: Spring Data repository interfaces.
- **services**: service classes.
- **controllers**: REST controllers.

## Database

Put the following in `src/main/resources/application.properties`:

```
{properties}```

The database `{db}` must exist in PostgreSQL before the first run.

## Running

1. Install a JDK (17 or newer) and Maven.
2. Copy the folders into `src/main/java/` of a Spring Boot project with
   `spring-boot-starter-data-jpa`, `spring-boot-starter-web`, `lombok` and
   the PostgreSQL driver.
3. Run:
   ```sh
   mvn spring-boot:run
   ```

The server listens on port {server_port}.
"#,
        properties = application_properties(ds),
        db = ds.database,
        server_port = ds.server_port,
    )
}
