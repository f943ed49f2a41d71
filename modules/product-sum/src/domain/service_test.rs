#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_data_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(dir.path().join(name), content).expect("Failed to write fixture");
        }
        dir
    }

    fn create_service(dir: &TempDir) -> ProductSumService {
        ProductSumService::new(ServiceConfig {
            data_dir: dir.path().to_path_buf(),
        })
    }

    fn request(file: &str, product: &str) -> CalculationRequest {
        CalculationRequest::new(Some(file.to_owned()), Some(product.to_owned())).unwrap()
    }

    const WIDGETS: &str = "product,qty\nwidget,10\nwidget,5\ngadget,3\n";

    #[tokio::test]
    async fn test_calculate_sums_matching_rows() {
        let dir = create_data_dir(&[("f.csv", WIDGETS)]);
        let service = create_service(&dir);

        assert_eq!(service.calculate(&request("f.csv", "widget")).await.unwrap(), 15);
        assert_eq!(service.calculate(&request("f.csv", "gizmo")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_stripped() {
        let dir = create_data_dir(&[("f.csv", "\n\n  product,qty\r\nwidget,2\r\nwidget,3\r\n\n\n")]);
        let service = create_service(&dir);

        assert_eq!(service.calculate(&request("f.csv", "widget")).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_empty_file_is_header_only() {
        let dir = create_data_dir(&[("empty.csv", "")]);
        let service = create_service(&dir);

        assert_eq!(service.calculate(&request("empty.csv", "widget")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = create_data_dir(&[]);
        let service = create_service(&dir);

        let err = service.calculate(&request("nope.csv", "widget")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.file(), Some("nope.csv"));
    }

    #[tokio::test]
    async fn test_malformed_row_is_malformed_input() {
        let dir = create_data_dir(&[("bad.csv", "product,qty\nwidget,10,extra\n")]);
        let service = create_service(&dir);

        let err = service.calculate(&request("bad.csv", "widget")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(matches!(
            err,
            DomainError::MalformedInput {
                source: AggregationError::FieldCount { line: 2, .. },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_subdirectories_are_allowed() {
        let dir = create_data_dir(&[]);
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/f.csv"), WIDGETS).unwrap();
        let service = create_service(&dir);

        assert_eq!(
            service.calculate(&request("nested/f.csv", "gadget")).await.unwrap(),
            3
        );
        assert_eq!(
            service.calculate(&request("./nested/f.csv", "gadget")).await.unwrap(),
            3
        );
    }

    #[tokio::test]
    async fn test_parent_traversal_is_refused() {
        let outer = TempDir::new().unwrap();
        fs::write(outer.path().join("secret.csv"), WIDGETS).unwrap();
        let data_dir = outer.path().join("data");
        fs::create_dir(&data_dir).unwrap();
        let service = ProductSumService::new(ServiceConfig { data_dir });

        let err = service
            .calculate(&request("../secret.csv", "widget"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_absolute_path_is_refused() {
        let outer = create_data_dir(&[("secret.csv", WIDGETS)]);
        let data = create_data_dir(&[]);
        let service = create_service(&data);

        let absolute = outer.path().join("secret.csv");
        let err = service
            .calculate(&request(absolute.to_str().unwrap(), "widget"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_out_of_data_dir_is_refused() {
        let outer = create_data_dir(&[("secret.csv", WIDGETS)]);
        let data = create_data_dir(&[]);
        std::os::unix::fs::symlink(outer.path().join("secret.csv"), data.path().join("link.csv"))
            .unwrap();
        let service = create_service(&data);

        let err = service.calculate(&request("link.csv", "widget")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_directory_is_processing_failure() {
        let dir = create_data_dir(&[]);
        fs::create_dir(dir.path().join("folder")).unwrap();
        let service = create_service(&dir);

        let err = service.calculate(&request("folder", "widget")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);
    }

    #[tokio::test]
    async fn test_non_utf8_file_is_processing_failure() {
        let dir = create_data_dir(&[]);
        fs::write(dir.path().join("bin.csv"), [0xff_u8, 0xfe, 0x00, 0x80]).unwrap();
        let service = create_service(&dir);

        let err = service.calculate(&request("bin.csv", "widget")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);
    }

    #[tokio::test]
    async fn test_sum_overflow_is_processing_failure() {
        let content = format!("product,qty\nwidget,{}\nwidget,1\n", i64::MAX);
        let dir = create_data_dir(&[("big.csv", content.as_str())]);
        let service = create_service(&dir);

        let err = service.calculate(&request("big.csv", "widget")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);
    }
}
